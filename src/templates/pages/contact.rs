use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn contact_page(usuario: &str) -> Markup {
    desktop_layout(
        "Entre em Contato",
        Some(usuario),
        "contact",
        html! {
            main class="container" {
                h1 { "Entre em Contato" }
                p { "Nossa equipe está pronta para atender suas necessidades." }

                section style="margin-top: 1.5rem;" {
                    h2 { "Informações de Contato" }
                    table class="detail-table" {
                        tbody {
                            tr { td { "Telefone" } td { "(45) 2105-9600" } }
                            tr { td { "E-mail" } td { "foztrans@pmfi.pr.gov.br" } }
                            tr {
                                td { "Endereço" }
                                td { "Rua Edgard Schimmelpfeng, 43, Foz do Iguaçu - PR, 85863-900" }
                            }
                            tr {
                                td { "Horário de Funcionamento" }
                                td { "Segunda à Sexta: 8h às 18h. Sábado: 8h às 12h." }
                            }
                        }
                    }
                }
            }
        },
    )
}
