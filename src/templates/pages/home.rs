use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page(usuario: &str) -> Markup {
    desktop_layout(
        "Início",
        Some(usuario),
        "home",
        html! {
            div class="hero" {
                h1 { "FozTrans" }
                p { "Instituto de Transporte e Trânsito de Foz do Iguaçu" }
                div {
                    a class="button" href="/patio" { "Ver Pátio" }
                    a class="button" href="/search" { "Veículos Liberados" }
                }
            }
        },
    )
}
