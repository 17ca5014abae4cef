// src/tests/router_tests/auth_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, get_with_cookie, login, post_form, state_with_failing, state_with_patio,
    LOGIN_URL,
};

#[test]
fn unauthenticated_request_redirects_to_login() {
    let state = state_with_patio(vec![]);

    for path in ["/", "/patio", "/search", "/contact", "/patio/export"] {
        let resp = handle(get(path), &state).unwrap();
        assert_eq!(resp.status(), 302, "{path} should redirect");
        let loc = resp
            .headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(loc, "/login");
    }
}

#[test]
fn login_page_renders_without_a_session() {
    let state = state_with_patio(vec![]);
    let resp = handle(get("/login"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Acesso ao Sistema"));
}

#[test]
fn valid_credentials_set_cookie_and_redirect_home() {
    let state = state_with_patio(vec![]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("FozTrans"));
    assert!(body.contains("Sair"));
}

#[test]
fn wrong_credentials_rerender_login_with_inline_error() {
    let state = state_with_patio(vec![]);
    let resp = handle(post_form("/login", "usuario=admin&senha=errada"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Usuário ou senha inválidos."));
}

#[test]
fn login_sheet_fetch_failure_shows_static_message() {
    let state = state_with_failing(LOGIN_URL);
    let resp = handle(post_form("/login", "usuario=admin&senha=segredo"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Erro ao carregar dados de login."));
}

#[test]
fn logout_revokes_the_session() {
    let state = state_with_patio(vec![]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/logout", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 302);

    // The old cookie no longer resolves.
    let resp = handle(get_with_cookie("/", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 302);
}

#[test]
fn unknown_route_is_not_found() {
    let state = state_with_patio(vec![]);
    let cookie = login(&state);
    let err = handle(get_with_cookie("/nope", &cookie), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
