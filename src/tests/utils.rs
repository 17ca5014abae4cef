// src/tests/utils.rs
use crate::auth::credentials::{COL_PASSWORD, COL_USER};
use crate::auth::SESSION_COOKIE;
use crate::config::AppConfig;
use crate::domain::dates::sheet_epoch;
use crate::domain::normalize::{COL_LOCATION, COL_PLATE, COL_REMOVAL_DATE, COL_TRV};
use crate::errors::ServerError;
use crate::router::handle;
use crate::sheets::{CellValue, RawRow, SheetSource};
use crate::state::AppState;
use astra::{Body, Request, Response};
use chrono::{Duration, Local};
use http::Method;
use std::collections::HashMap;
use std::io::Read;

pub const PATIO_URL: &str = "https://sheets.test/patio.xlsx";
pub const LOGIN_URL: &str = "https://sheets.test/login.xlsx";

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "segredo";

/// Canned sheet source: the router never touches the network in tests.
pub struct StubSheetSource {
    sheets: HashMap<String, Result<Vec<RawRow>, String>>,
}

impl SheetSource for StubSheetSource {
    fn fetch_rows(&self, url: &str) -> Result<Vec<RawRow>, ServerError> {
        match self.sheets.get(url) {
            Some(Ok(rows)) => Ok(rows.clone()),
            Some(Err(msg)) => Err(ServerError::FetchError(msg.clone())),
            None => Err(ServerError::FetchError(format!("no stub for {url}"))),
        }
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        patio_sheet_url: PATIO_URL.to_string(),
        login_sheet_url: LOGIN_URL.to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

fn credential_rows() -> Vec<RawRow> {
    let mut row = RawRow::new();
    row.push(COL_USER, CellValue::Text(TEST_USER.into()));
    row.push(COL_PASSWORD, CellValue::Text(TEST_PASSWORD.into()));
    vec![row]
}

/// State with the given yard rows and the default credential sheet.
pub fn state_with_patio(rows: Vec<RawRow>) -> AppState {
    let mut sheets = HashMap::new();
    sheets.insert(PATIO_URL.to_string(), Ok(rows));
    sheets.insert(LOGIN_URL.to_string(), Ok(credential_rows()));
    AppState::new(test_config(), Box::new(StubSheetSource { sheets }))
}

/// State where the given sheet URL fails to fetch.
pub fn state_with_failing(url: &str) -> AppState {
    let mut sheets = HashMap::new();
    sheets.insert(url.to_string(), Err("connection refused".to_string()));
    if url != LOGIN_URL {
        sheets.insert(LOGIN_URL.to_string(), Ok(credential_rows()));
    }
    AppState::new(test_config(), Box::new(StubSheetSource { sheets }))
}

/// A yard row whose removal date is `days_ago` days before today.
pub fn yard_row(trv: &str, plate: &str, days_ago: i64) -> RawRow {
    let date = Local::now().date_naive() - Duration::days(days_ago);
    let serial = (date - sheet_epoch()).num_days() as f64;

    let mut row = RawRow::new();
    row.push(COL_TRV, CellValue::Text(trv.into()));
    row.push(COL_PLATE, CellValue::Text(plate.into()));
    row.push(COL_LOCATION, CellValue::Text("Av. Brasil, 100".into()));
    row.push(COL_REMOVAL_DATE, CellValue::Number(serial));
    row
}

pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn get_with_cookie(path: &str, cookie: &str) -> Request {
    let mut req = get(path);
    req.headers_mut()
        .insert("Cookie", cookie.parse().unwrap());
    req
}

pub fn post_form(path: &str, body: &str) -> Request {
    let mut req = Request::new(Body::new(body.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = path.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

/// Sign in through the router and return the session cookie pair.
pub fn login(state: &AppState) -> String {
    let body = format!("usuario={TEST_USER}&senha={TEST_PASSWORD}");
    let resp = handle(post_form("/login", &body), state).expect("login request failed");
    assert_eq!(resp.status(), 302, "login should redirect");

    let set_cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .expect("login should set a session cookie");
    assert!(set_cookie.starts_with(SESSION_COOKIE));

    // "patio_session=<token>; Path=/; ..." -> "patio_session=<token>"
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

pub fn body_string(resp: Response) -> String {
    let mut body = resp.into_body();
    let mut out = String::new();
    body.reader()
        .read_to_string(&mut out)
        .expect("response body should be utf-8");
    out
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = resp.into_body();
    let mut out = Vec::new();
    body.reader()
        .read_to_end(&mut out)
        .expect("response body read failed");
    out
}
