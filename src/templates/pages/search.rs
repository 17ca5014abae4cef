use crate::domain::dates::parse_text_datetime;
use crate::domain::search::ReleasedVehicle;
use crate::templates::{desktop_layout, error_box};
use maud::{html, Markup};

pub enum SearchOutcome {
    /// Initial page load, nothing searched yet.
    Form,
    /// Blank input or no match; localized message rendered inline.
    Error(String),
    Found(&'static ReleasedVehicle),
}

pub fn search_page(usuario: &str, term: &str, outcome: &SearchOutcome) -> Markup {
    desktop_layout(
        "Consulta de Placa",
        Some(usuario),
        "search",
        html! {
            main class="container" {
                h1 { "Consulta de Placa" }
                p { "Digite a placa do veículo para consultar informações detalhadas" }

                form class="inline" action="/search" method="get" {
                    div style="flex: 1;" {
                        label for="placa" { "Placa do Veículo" }
                        input id="placa" type="text" name="placa" value=(term)
                            placeholder="Ex: ABC-1234" maxlength="8";
                    }
                    button type="submit" { "Buscar" }
                }

                @match outcome {
                    SearchOutcome::Form => {}
                    SearchOutcome::Error(message) => { (error_box(message)) }
                    SearchOutcome::Found(vehicle) => { (result_card(vehicle)) }
                }
            }
        },
    )
}

fn result_card(vehicle: &ReleasedVehicle) -> Markup {
    html! {
        section class="vehicle-card" style="margin-top: 1.5rem;" {
            h2 { "Informações do Veículo" }
            table class="detail-table" {
                tbody {
                    tr { td { "Placa" } td { (vehicle.plate) } }
                    tr { td { "Modelo" } td { (vehicle.model) } }
                    tr { td { "Ano" } td { (vehicle.year) } }
                    tr { td { "Cor" } td { (vehicle.color) } }
                    tr { td { "Proprietário" } td { (vehicle.owner) } }
                    tr { td { "Status" } td { (vehicle.status) } }
                    tr { td { "Localização" } td { (vehicle.location) } }
                    tr { td { "Data de Entrada" } td { (format_stamp(vehicle.entry_date)) } }
                    tr { td { "Última Atualização" } td { (format_stamp(vehicle.last_update)) } }
                }
            }
        }
    }
}

fn format_stamp(stamp: &str) -> String {
    parse_text_datetime(stamp)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| stamp.to_string())
}
