// src/router.rs
use crate::auth::{check_credentials, now_unix, SESSION_COOKIE};
use crate::domain::normalize::normalize_rows;
use crate::domain::search::find_by_plate;
use crate::domain::{VehicleRecord, VehicleStatus};
use crate::errors::ServerError;
use crate::responses::{
    clear_session_cookie, html_response, redirect_response, session_cookie, xlsx_response,
    ResultResp,
};
use crate::spreadsheets::{export_auction_xlsx, EXPORT_FILENAME};
use crate::state::AppState;
use crate::templates::pages::patio::status_counts;
use crate::templates::pages::{
    contact_page, home_page, login_page, patio_page, search_page, PatioVm, SearchOutcome,
};
use astra::Request;
use chrono::Local;
use std::collections::HashMap;
use std::io::Read;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_query(req.uri().query());

    match (method.as_str(), path.as_str()) {
        ("GET", "/login") => get_login(&req, state),
        ("POST", "/login") => post_login(&mut req, state),
        ("GET", "/logout") => get_logout(&req, state),
        _ => {
            // Everything else requires a session.
            let Some(usuario) = current_user(&req, state) else {
                return redirect_response("/login", None);
            };

            match (method.as_str(), path.as_str()) {
                ("GET", "/") => html_response(home_page(&usuario)),
                ("GET", "/patio") => get_patio(state, &usuario, &query),
                ("GET", "/patio/export") => get_export(state, &usuario),
                ("GET", "/search") => get_search(&usuario, &query),
                ("GET", "/contact") => html_response(contact_page(&usuario)),
                _ => Err(ServerError::NotFound),
            }
        }
    }
}

// ---- auth routes ----

fn get_login(req: &Request, state: &AppState) -> ResultResp {
    if current_user(req, state).is_some() {
        return redirect_response("/", None);
    }
    html_response(login_page(None))
}

fn post_login(req: &mut Request, state: &AppState) -> ResultResp {
    let form = parse_form(req)?;
    let usuario = form.get("usuario").map(String::as_str).unwrap_or("");
    let senha = form.get("senha").map(String::as_str).unwrap_or("");

    let rows = match state.sheets.fetch_rows(&state.config.login_sheet_url) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("login sheet fetch failed: {e}");
            return html_response(login_page(Some("Erro ao carregar dados de login.")));
        }
    };

    if check_credentials(&rows, usuario, senha) {
        let token = state.sessions.create(usuario.trim(), now_unix());
        println!("🔓 Login de {}", usuario.trim());
        redirect_response("/", Some(session_cookie(&token)))
    } else {
        html_response(login_page(Some("Usuário ou senha inválidos.")))
    }
}

fn get_logout(req: &Request, state: &AppState) -> ResultResp {
    if let Some(token) = session_token(req) {
        state.sessions.revoke(&token);
    }
    redirect_response("/login", Some(clear_session_cookie()))
}

// ---- patio routes ----

fn get_patio(state: &AppState, usuario: &str, query: &HashMap<String, String>) -> ResultResp {
    let now = Local::now().naive_local();

    // A fetch failure leaves the list empty and surfaces one message; the
    // page stays interactive either way.
    let (vehicles, fetch_error) = match state.sheets.fetch_rows(&state.config.patio_sheet_url) {
        Ok(rows) => (normalize_rows(&rows, now), None),
        Err(e) => {
            eprintln!("patio sheet fetch failed: {e}");
            (
                Vec::new(),
                Some("Erro ao carregar os veículos do pátio.".to_string()),
            )
        }
    };

    render_patio(usuario, vehicles, query, None, fetch_error)
}

fn get_export(state: &AppState, usuario: &str) -> ResultResp {
    let now = Local::now().naive_local();
    let rows = state.sheets.fetch_rows(&state.config.patio_sheet_url)?;
    let vehicles = normalize_rows(&rows, now);

    let eligible: Vec<VehicleRecord> = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::AuctionEligible)
        .cloned()
        .collect();

    if eligible.is_empty() {
        // No file is produced; fall back to the listing with a notice.
        return render_patio(
            usuario,
            vehicles,
            &HashMap::new(),
            Some("Nenhum veículo disponível para leilão encontrado.".to_string()),
            None,
        );
    }

    let buffer = export_auction_xlsx(&eligible)?;
    println!("📄 Exportados {} veículos para leilão", eligible.len());
    xlsx_response(buffer, EXPORT_FILENAME)
}

fn render_patio(
    usuario: &str,
    vehicles: Vec<VehicleRecord>,
    query: &HashMap<String, String>,
    notice: Option<String>,
    fetch_error: Option<String>,
) -> ResultResp {
    let (total, in_yard, auction) = status_counts(&vehicles);

    let filter = query.get("placa").cloned().unwrap_or_default();
    let needle = filter.trim().to_uppercase();
    let filtered: Vec<VehicleRecord> = vehicles
        .iter()
        .filter(|v| needle.is_empty() || v.plate.to_uppercase().contains(&needle))
        .cloned()
        .collect();

    let selected = query
        .get("trv")
        .and_then(|id| vehicles.iter().find(|v| &v.id == id).cloned());

    let vm = PatioVm {
        usuario: usuario.to_string(),
        total,
        in_yard,
        auction,
        filter,
        vehicles: filtered,
        selected,
        notice,
        fetch_error,
    };
    html_response(patio_page(&vm))
}

// ---- search route ----

fn get_search(usuario: &str, query: &HashMap<String, String>) -> ResultResp {
    let term = query.get("placa").cloned();
    let outcome = match term.as_deref() {
        None => SearchOutcome::Form,
        Some(t) if t.trim().is_empty() => {
            SearchOutcome::Error("Por favor, digite uma placa para pesquisar".to_string())
        }
        Some(t) => match find_by_plate(t) {
            Some(vehicle) => SearchOutcome::Found(vehicle),
            None => {
                SearchOutcome::Error("Veículo não encontrado em nossa base de dados".to_string())
            }
        },
    };

    html_response(search_page(usuario, term.as_deref().unwrap_or(""), &outcome))
}

// ---- request helpers ----

fn current_user(req: &Request, state: &AppState) -> Option<String> {
    let token = session_token(req)?;
    state.sessions.lookup(&token, now_unix())
}

fn session_token(req: &Request) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;
    header.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    match query {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("reading form body failed: {e}")))?;

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}
