// src/domain/format.rs
//
// Display formatting for the raw sheet cells shown in the detail view and
// the export. All helpers are total: a cell that cannot be decoded renders
// as a localized sentinel, never as an error.

use crate::domain::dates::{parse_text_datetime, serial_to_date, serial_to_datetime, DateCell};
use crate::domain::normalize::{COL_REMOVAL_DATE, COL_SEIZURE_TIME, COL_TIMESTAMP};
use crate::sheets::CellValue;
use chrono::Duration;

pub const INVALID_DATE: &str = "Data inválida";
pub const INVALID_TIME: &str = "Hora inválida";

// Empirically fitted offsets of the upstream source system, applied only on
// the numeric (serial) path. The date-only decoder is NOT corrected.
// See DESIGN.md before touching these.
const SERIAL_HOUR_OFFSET: i64 = 3;
const SEIZURE_MINUTE_OFFSET: i64 = 7;

/// `dd/mm/yyyy`, date-only.
pub fn format_date(cell: &DateCell) -> String {
    match cell {
        DateCell::Serial(n) => serial_to_date(*n)
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| INVALID_DATE.to_string()),
        DateCell::Text(s) => parse_text_datetime(s)
            .map(|dt| dt.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| INVALID_DATE.to_string()),
        DateCell::Missing => INVALID_DATE.to_string(),
    }
}

/// `dd/mm/yyyy HH:MM:SS` for the form-submission timestamp column.
pub fn format_datetime(cell: &DateCell) -> String {
    match cell {
        DateCell::Serial(n) => serial_to_datetime(*n)
            .and_then(|dt| dt.checked_add_signed(Duration::hours(SERIAL_HOUR_OFFSET)))
            .map(|dt| dt.format("%d/%m/%Y %H:%M:%S").to_string())
            .unwrap_or_else(|| INVALID_DATE.to_string()),
        DateCell::Text(s) => parse_text_datetime(s)
            .map(|dt| dt.format("%d/%m/%Y %H:%M:%S").to_string())
            .unwrap_or_else(|| INVALID_DATE.to_string()),
        DateCell::Missing => INVALID_DATE.to_string(),
    }
}

/// 24-hour `HH:MM` for the time-of-seizure column.
pub fn format_time(cell: &DateCell) -> String {
    match cell {
        DateCell::Serial(n) => serial_to_datetime(*n)
            .and_then(|dt| dt.checked_add_signed(Duration::hours(SERIAL_HOUR_OFFSET)))
            .and_then(|dt| dt.checked_add_signed(Duration::minutes(SEIZURE_MINUTE_OFFSET)))
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_else(|| INVALID_TIME.to_string()),
        DateCell::Text(s) => parse_text_datetime(s)
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_else(|| INVALID_TIME.to_string()),
        DateCell::Missing => INVALID_TIME.to_string(),
    }
}

/// Detail-view rendering of one raw cell: the three known date columns go
/// through their decoders, everything else passes through as typed.
pub fn format_raw_cell(column: &str, cell: &CellValue) -> String {
    match column {
        COL_REMOVAL_DATE => format_date(&DateCell::from_cell(Some(cell))),
        COL_TIMESTAMP => format_datetime(&DateCell::from_cell(Some(cell))),
        COL_SEIZURE_TIME => format_time(&DateCell::from_cell(Some(cell))),
        _ => cell.as_display(),
    }
}
