use maud::{html, Markup, DOCTYPE};

const NAV_ITEMS: [(&str, &str, &str); 4] = [
    ("home", "/", "Início"),
    ("patio", "/patio", "Pátio"),
    ("search", "/search", "Veículos Liberados"),
    ("contact", "/contact", "Contato"),
];

/// Shared page chrome. `usuario` is the signed-in user; `None` renders the
/// bare layout used by the login page (no nav, no logout link).
pub fn desktop_layout(title: &str, usuario: Option<&str>, active: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - FozTrans" }
                style { (maud::PreEscaped(BASE_CSS)) }
            }
            body {
                @if let Some(usuario) = usuario {
                    header class="topbar" {
                        span class="brand" { "FozTrans" }
                        nav {
                            ul {
                                @for (id, href, label) in NAV_ITEMS {
                                    li {
                                        a href=(href) class=[(id == active).then_some("active")] {
                                            (label)
                                        }
                                    }
                                }
                            }
                        }
                        span class="session" {
                            (usuario)
                            " · "
                            a href="/logout" { "Sair" }
                        }
                    }
                }
                (content)
                footer class="footer" {
                    p { "© 2025 FozTrans. Todos os direitos reservados." }
                }
            }
        }
    }
}

const BASE_CSS: &str = r#"
body { font-family: sans-serif; margin: 0; color: #1f2937; }
.topbar { display: flex; align-items: center; justify-content: space-between;
          padding: 0.75rem 1.5rem; box-shadow: 0 1px 4px rgba(0,0,0,0.15); }
.topbar .brand { font-size: 1.4rem; font-weight: bold; color: #1e40af; }
.topbar nav ul { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
.topbar a { text-decoration: none; color: #374151; }
.topbar a.active { color: #1e40af; font-weight: bold; }
.container { max-width: 64rem; margin: 0 auto; padding: 2rem 1rem; }
.hero { background: #1e3a8a; color: white; text-align: center; padding: 4rem 1rem; }
.hero a.button { display: inline-block; margin: 0.5rem; padding: 0.75rem 2rem;
                 background: #f97316; color: white; border-radius: 0.5rem;
                 text-decoration: none; font-weight: bold; }
.stats { display: flex; gap: 1rem; margin-bottom: 2rem; }
.stat-card { flex: 1; padding: 1.5rem; border-radius: 0.5rem; text-align: center; }
.stat-card .value { font-size: 2rem; font-weight: bold; }
.stat-blue { background: #eff6ff; color: #1d4ed8; }
.stat-green { background: #f0fdf4; color: #15803d; }
.stat-red { background: #fef2f2; color: #b91c1c; }
.cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem; }
.vehicle-card { border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 1.25rem; }
.vehicle-card .plate { font-weight: bold; font-size: 1.1rem; }
.badge { padding: 0.15rem 0.6rem; border-radius: 1rem; font-size: 0.75rem; }
.badge-green { background: #dcfce7; color: #166534; }
.badge-red { background: #fee2e2; color: #991b1b; }
.error-box { background: #fef2f2; border: 1px solid #fecaca; color: #b91c1c;
             border-radius: 0.5rem; padding: 1rem; margin: 1rem 0; }
.notice-box { background: #fffbeb; border: 1px solid #fde68a; color: #92400e;
              border-radius: 0.5rem; padding: 1rem; margin: 1rem 0; }
.detail-table { width: 100%; border-collapse: collapse; }
.detail-table td { border-bottom: 1px solid #e5e7eb; padding: 0.5rem 0.75rem; }
.detail-table td:first-child { font-weight: bold; width: 33%; }
form.inline { display: flex; gap: 0.75rem; align-items: end; }
input[type=text], input[type=password] { padding: 0.6rem; border: 1px solid #d1d5db;
                                         border-radius: 0.5rem; width: 100%; box-sizing: border-box; }
button, a.button-primary { background: #2563eb; color: white; border: none; padding: 0.6rem 1.5rem;
                           border-radius: 0.5rem; cursor: pointer; text-decoration: none; }
a.button-danger { background: #dc2626; color: white; padding: 0.5rem 1rem;
                  border-radius: 0.4rem; text-decoration: none; font-size: 0.9rem; }
.footer { background: #111827; color: #d1d5db; text-align: center; padding: 1.5rem; margin-top: 3rem; }
"#;
