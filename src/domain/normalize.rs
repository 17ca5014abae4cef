// src/domain/normalize.rs
//
// The fetch-normalize-classify pipeline. Pure over (rows, now): the caller
// injects the reference instant instead of this module reading the clock,
// so the threshold logic is testable in isolation.

use crate::domain::dates::DateCell;
use crate::domain::vehicle::{VehicleRecord, VehicleStatus};
use crate::sheets::RawRow;
use chrono::{Duration, NaiveDateTime};

// Column names as they appear in the yard sheet's header row.
pub const COL_TRV: &str = "N.º TRV";
pub const COL_PLATE: &str = "Placa";
pub const COL_MAKE: &str = "Marca";
pub const COL_MODEL: &str = "Modelo";
pub const COL_YEAR: &str = "Ano";
pub const COL_COLOR: &str = "Cor";
pub const COL_LOCATION: &str = "Local da Apreensão";
pub const COL_REMOVAL_DATE: &str = "Data da Remoção";
pub const COL_SEIZURE_TIME: &str = "Horário da Apreensão";
pub const COL_TIMESTAMP: &str = "Carimbo de data/hora";

// Sentinels for absent cells.
pub const NO_PLATE: &str = "SEM-PLACA";
pub const NOT_INFORMED: &str = "Não informado";
pub const UNKNOWN_LOCATION: &str = "Local desconhecido";

/// Statutory stay before a vehicle may go to auction.
pub const AUCTION_THRESHOLD_DAYS: i64 = 60;

/// Strictly more than 60 continuous days in the yard makes a vehicle
/// auction-eligible; exactly 60 days is still in yard.
pub fn derive_status(removed_at: NaiveDateTime, now: NaiveDateTime) -> VehicleStatus {
    if now.signed_duration_since(removed_at) > Duration::days(AUCTION_THRESHOLD_DAYS) {
        VehicleStatus::AuctionEligible
    } else {
        VehicleStatus::InYard
    }
}

/// Normalize one raw sheet row. Total: every malformed or missing cell
/// degrades to a sentinel or to `now`, never to an error.
pub fn normalize_row(row: &RawRow, index: usize, now: NaiveDateTime) -> VehicleRecord {
    let id = row
        .get(COL_TRV)
        .map(|c| c.as_display())
        .unwrap_or_else(|| index.to_string());

    let plate = row
        .get(COL_PLATE)
        .map(|c| c.as_display())
        .unwrap_or_else(|| NO_PLATE.to_string());

    let make = row.get(COL_MAKE).map(|c| c.as_display()).unwrap_or_default();
    let model = row.get(COL_MODEL).map(|c| c.as_display()).unwrap_or_default();
    let model = format!("{make} {model}").trim().to_string();

    let year = row
        .get(COL_YEAR)
        .map(|c| c.as_display())
        .unwrap_or_else(|| NOT_INFORMED.to_string());

    let color = row
        .get(COL_COLOR)
        .map(|c| c.as_display())
        .unwrap_or_else(|| NOT_INFORMED.to_string());

    let location = row
        .get(COL_LOCATION)
        .map(|c| c.as_display())
        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());

    let removed_at = DateCell::from_cell(row.get(COL_REMOVAL_DATE)).decode(now);
    let status = derive_status(removed_at, now);

    VehicleRecord {
        id,
        plate,
        model,
        year,
        color,
        location,
        removed_at,
        status,
        raw: row.clone(),
    }
}

/// Normalize a whole fetched row set against one reference instant.
pub fn normalize_rows(rows: &[RawRow], now: NaiveDateTime) -> Vec<VehicleRecord> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| normalize_row(row, i, now))
        .collect()
}
