// src/spreadsheets/export_xlsx.rs
use crate::domain::VehicleRecord;
use crate::errors::ServerError;
use rust_xlsxwriter::Workbook;

pub const EXPORT_FILENAME: &str = "Relatorio_Leilao.xlsx";

/// Write the auction report workbook to a buffer. The caller is expected to
/// have filtered down to the auction-eligible subset already, and to
/// short-circuit before calling this when that subset is empty.
pub fn export_auction_xlsx(vehicles: &[VehicleRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Leilao")
        .map_err(|e| ServerError::XlsxError(format!("Failed to name sheet: {e}")))?;

    let headers = [
        "Placa",
        "Modelo",
        "Ano",
        "Cor",
        "Local da Apreensão",
        "Data da Remoção",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    for (i, vehicle) in vehicles.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &vehicle.plate)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write plate: {e}")))?;

        worksheet
            .write_string(r, 1, &vehicle.model)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write model: {e}")))?;

        worksheet
            .write_string(r, 2, &vehicle.year)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write year: {e}")))?;

        worksheet
            .write_string(r, 3, &vehicle.color)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write color: {e}")))?;

        worksheet
            .write_string(r, 4, &vehicle.location)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write location: {e}")))?;

        let removal = vehicle.removed_at.format("%d/%m/%Y").to_string();
        worksheet
            .write_string(r, 5, &removal)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write removal date: {e}")))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}
