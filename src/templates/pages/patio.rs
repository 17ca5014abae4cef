use crate::domain::format::format_raw_cell;
use crate::domain::{VehicleRecord, VehicleStatus};
use crate::templates::{desktop_layout, error_box, stat_card, status_badge};
use crate::templates::components::notice_box;
use maud::{html, Markup};

pub struct PatioVm {
    pub usuario: String,
    pub total: usize,
    pub in_yard: usize,
    pub auction: usize,
    /// Current plate filter, echoed back into the search box.
    pub filter: String,
    /// Vehicles after the plate filter.
    pub vehicles: Vec<VehicleRecord>,
    /// Detail view target, when a card's "Ver Detalhes" was followed.
    pub selected: Option<VehicleRecord>,
    pub notice: Option<String>,
    pub fetch_error: Option<String>,
}

pub fn patio_page(vm: &PatioVm) -> Markup {
    desktop_layout(
        "Veículos no Pátio",
        Some(&vm.usuario),
        "patio",
        html! {
            main class="container" {
                h1 { "Veículos no Pátio" }
                p { "Visualize todos os veículos em nosso pátio em tempo real!" }

                @if let Some(error) = &vm.fetch_error {
                    (error_box(error))
                }
                @if let Some(notice) = &vm.notice {
                    (notice_box(notice))
                }

                div class="stats" {
                    (stat_card(vm.total, "Total de Veículos no Pátio.", "blue"))
                    (stat_card(vm.in_yard, "Veículos dentro do prazo do Pátio.", "green"))
                    (stat_card(vm.auction, "Veículos disponíveis para Leilão.", "red"))
                }

                form class="inline" action="/patio" method="get" style="margin-bottom: 1rem;" {
                    input type="text" name="placa" value=(vm.filter)
                        placeholder="Buscar por placa...";
                    button type="submit" { "Filtrar" }
                }

                div style="text-align: right; margin-bottom: 1rem;" {
                    a class="button-danger" href="/patio/export" { "Exportar Leilão" }
                }

                @if let Some(vehicle) = &vm.selected {
                    (detail_view(vehicle))
                }

                div class="cards" {
                    @for vehicle in &vm.vehicles {
                        (vehicle_card(vehicle))
                    }
                }
            }
        },
    )
}

fn vehicle_card(vehicle: &VehicleRecord) -> Markup {
    html! {
        div class="vehicle-card" {
            div style="display: flex; justify-content: space-between; margin-bottom: 0.75rem;" {
                span class="plate" { (vehicle.plate.to_uppercase()) }
                (status_badge(vehicle.status))
            }
            h3 style="margin: 0.25rem 0;" { (vehicle.model) }
            p style="margin: 0.25rem 0; color: #6b7280;" {
                (vehicle.year) " • " (vehicle.color)
            }
            p style="margin: 0.25rem 0;" { (vehicle.location) }
            p style="margin: 0.25rem 0;" {
                "Data da Remoção: " (vehicle.removed_at.format("%d/%m/%Y"))
            }
            a class="button-primary" href={ "/patio?trv=" (vehicle.id) } { "Ver Detalhes" }
        }
    }
}

/// Full raw-row table for one vehicle, in sheet column order. The three
/// known date columns go through their decoders; everything else is shown
/// as typed in the sheet.
fn detail_view(vehicle: &VehicleRecord) -> Markup {
    html! {
        section style="margin-bottom: 2rem;" {
            h2 { "Detalhes do Veículo " (vehicle.plate.to_uppercase()) }
            table class="detail-table" {
                tbody {
                    @for (column, cell) in vehicle.raw.iter() {
                        tr {
                            td { (column) }
                            td { (format_raw_cell(column, cell)) }
                        }
                    }
                }
            }
            p { a href="/patio" { "Fechar" } }
        }
    }
}

/// Counts are always over the full normalized list, not the filtered view.
pub fn status_counts(vehicles: &[VehicleRecord]) -> (usize, usize, usize) {
    let in_yard = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::InYard)
        .count();
    let auction = vehicles.len() - in_yard;
    (vehicles.len(), in_yard, auction)
}
