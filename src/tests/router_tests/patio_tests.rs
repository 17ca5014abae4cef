// src/tests/router_tests/patio_tests.rs
use crate::router::handle;
use crate::tests::utils::{
    body_string, get_with_cookie, login, state_with_failing, state_with_patio, yard_row, PATIO_URL,
};

#[test]
fn listing_renders_vehicles_with_derived_statuses() {
    // 100 days in the yard is past the threshold, 10 days is not.
    let state = state_with_patio(vec![
        yard_row("1042", "ABC-1234", 100),
        yard_row("1043", "DEF-5678", 10),
    ]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/patio", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("ABC-1234"));
    assert!(body.contains("DEF-5678"));
    assert!(body.contains("Disponível para Leilão"));
    assert!(body.contains("No pátio"));
}

#[test]
fn plate_filter_narrows_the_cards() {
    let state = state_with_patio(vec![
        yard_row("1042", "ABC-1234", 100),
        yard_row("1043", "DEF-5678", 10),
    ]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/patio?placa=abc", &cookie), &state).unwrap();
    let body = body_string(resp);

    assert!(body.contains("ABC-1234"));
    assert!(!body.contains("DEF-5678"));
}

#[test]
fn filter_does_not_change_the_summary_counts() {
    let state = state_with_patio(vec![
        yard_row("1042", "ABC-1234", 100),
        yard_row("1043", "DEF-5678", 10),
    ]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/patio?placa=abc", &cookie), &state).unwrap();
    let body = body_string(resp);

    // Total stays 2 even though only one card is shown.
    assert!(body.contains("Total de Veículos no Pátio."));
    assert!(body.contains(r#"<div class="value">2</div>"#));
}

#[test]
fn detail_view_renders_the_raw_row() {
    let state = state_with_patio(vec![yard_row("1042", "ABC-1234", 100)]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/patio?trv=1042", &cookie), &state).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Detalhes do Veículo"));
    assert!(body.contains("Local da Apreensão"));
    assert!(body.contains("Av. Brasil, 100"));
}

#[test]
fn fetch_failure_keeps_the_page_up_with_a_message() {
    let state = state_with_failing(PATIO_URL);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/patio", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Erro ao carregar os veículos do pátio."));
}

#[test]
fn missing_plate_renders_the_sentinel() {
    let mut row = yard_row("1042", "ABC-1234", 10);
    // Rebuild the row without a plate column.
    let mut bare = crate::sheets::RawRow::new();
    for (name, cell) in row.iter() {
        if name != crate::domain::normalize::COL_PLATE {
            bare.push(name.to_string(), cell.clone());
        }
    }
    row = bare;

    let state = state_with_patio(vec![row]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/patio", &cookie), &state).unwrap();
    let body = body_string(resp);
    assert!(body.contains("SEM-PLACA"));
}
