// src/tests/router_tests/search_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, get_with_cookie, login, state_with_patio};

#[test]
fn search_page_renders_the_form() {
    let state = state_with_patio(vec![]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/search", &cookie), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Consulta de Placa"));
}

#[test]
fn blank_input_prompts_for_a_plate() {
    let state = state_with_patio(vec![]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/search?placa=", &cookie), &state).unwrap();
    let body = body_string(resp);
    assert!(body.contains("Por favor, digite uma placa para pesquisar"));
}

#[test]
fn substring_match_finds_a_released_vehicle() {
    let state = state_with_patio(vec![]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/search?placa=abc", &cookie), &state).unwrap();
    let body = body_string(resp);
    assert!(body.contains("ABC-1234"));
    assert!(body.contains("Mercedes-Benz Sprinter"));
    assert!(body.contains("João Silva"));
}

#[test]
fn unknown_plate_shows_the_not_found_message() {
    let state = state_with_patio(vec![]);
    let cookie = login(&state);

    let resp = handle(get_with_cookie("/search?placa=ZZZ-0000", &cookie), &state).unwrap();
    let body = body_string(resp);
    assert!(body.contains("Veículo não encontrado em nossa base de dados"));
}
