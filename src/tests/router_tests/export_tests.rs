// src/tests/router_tests/export_tests.rs
use crate::router::handle;
use crate::tests::utils::{
    body_bytes, body_string, get_with_cookie, login, state_with_patio, yard_row,
};

#[test]
fn export_with_eligible_vehicles_downloads_a_workbook() {
    let state = state_with_patio(vec![
        yard_row("1042", "ABC-1234", 100),
        yard_row("1043", "DEF-5678", 10),
    ]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/patio/export", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.contains("spreadsheetml"));

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(disposition.contains("Relatorio_Leilao.xlsx"));

    let bytes = body_bytes(resp);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn export_with_no_eligible_vehicles_produces_no_file() {
    // Everything is inside the 60-day window.
    let state = state_with_patio(vec![
        yard_row("1042", "ABC-1234", 10),
        yard_row("1043", "DEF-5678", 59),
    ]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/patio/export", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.contains("text/html"));

    let body = body_string(resp);
    assert!(body.contains("Nenhum veículo disponível para leilão encontrado."));
}

#[test]
fn export_of_empty_sheet_produces_no_file() {
    let state = state_with_patio(vec![]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/patio/export", &cookie), &state).unwrap();
    let body = body_string(resp);
    assert!(body.contains("Nenhum veículo disponível para leilão encontrado."));
}
