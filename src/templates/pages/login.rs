use crate::templates::{components::error_box, desktop_layout};
use maud::{html, Markup};

pub fn login_page(error: Option<&str>) -> Markup {
    desktop_layout(
        "Acesso ao Sistema",
        None,
        "",
        html! {
            main class="container" style="max-width: 28rem;" {
                h1 { "Acesso ao Sistema" }
                p { "Entre com suas credenciais para continuar" }

                form action="/login" method="post" {
                    div style="margin-bottom: 1rem;" {
                        label for="usuario" { "Usuário" }
                        input id="usuario" name="usuario" type="text" required
                            placeholder="Digite seu usuário";
                    }
                    div style="margin-bottom: 1rem;" {
                        label for="senha" { "Senha" }
                        input id="senha" name="senha" type="password" required
                            placeholder="Digite sua senha";
                    }

                    @if let Some(error) = error {
                        (error_box(error))
                    }

                    button type="submit" { "Entrar no Sistema" }
                }
            }
        },
    )
}
