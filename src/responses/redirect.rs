// responses/redirect.rs
use crate::auth::SESSION_COOKIE;
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// 302 redirect, optionally carrying a Set-Cookie header (login/logout).
pub fn redirect_response(location: &str, set_cookie: Option<String>) -> ResultResp {
    let mut builder = ResponseBuilder::new().status(302).header("Location", location);

    if let Some(cookie) = set_cookie {
        builder = builder.header("Set-Cookie", cookie);
    }

    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// Session cookie value for a freshly created token.
pub fn session_cookie(raw_token: &str) -> String {
    format!("{SESSION_COOKIE}={raw_token}; Path=/; HttpOnly; SameSite=Lax; Max-Age=604800")
}

/// Expired cookie that removes the session from the browser.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
