// src/domain/dates.rs
use crate::sheets::CellValue;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

/// Day 0 of the spreadsheet serial scheme. Serial 1 is 1899-12-31,
/// serial 25569 is 1970-01-01.
pub fn sheet_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("fixed epoch date is valid")
}

/// A removal-date cell, resolved once at ingestion instead of re-branching
/// on the runtime value shape at every use site.
#[derive(Debug, Clone, PartialEq)]
pub enum DateCell {
    /// A spreadsheet date serial (day count since the epoch).
    Serial(f64),
    /// Free text that may or may not parse as a date.
    Text(String),
    Missing,
}

impl DateCell {
    pub fn from_cell(cell: Option<&CellValue>) -> Self {
        match cell {
            Some(CellValue::Number(n)) => DateCell::Serial(*n),
            Some(CellValue::Text(s)) => DateCell::Text(s.clone()),
            None => DateCell::Missing,
        }
    }

    /// Decode to an absolute timestamp. Serials take only their integer
    /// day count, landing at local midnight; unparseable text and missing
    /// cells fall back to `now`. Total: never fails, never panics.
    pub fn decode(&self, now: NaiveDateTime) -> NaiveDateTime {
        match self {
            DateCell::Serial(n) => serial_to_date(*n)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap_or(now),
            DateCell::Text(s) => parse_text_datetime(s).unwrap_or(now),
            DateCell::Missing => now,
        }
    }
}

/// Integer part of a serial to a calendar date. Date-only: the fractional
/// time-of-day component is deliberately dropped on this path.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    sheet_epoch().checked_add_signed(Duration::days(serial.trunc() as i64))
}

/// Full serial (days + fractional day) to a timestamp, seconds rounded.
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    let date = serial_to_date(serial)?;
    let secs = (serial.fract() * 86_400.0).round() as i64;
    date.and_hms_opt(0, 0, 0)?.checked_add_signed(Duration::seconds(secs))
}

/// Best-effort parse of a free-text date cell. The sheets mix ISO exports
/// with hand-typed pt-BR dates, so both layouts are tried.
pub fn parse_text_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    const DATETIME_LAYOUTS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%d/%m/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M",
    ];
    for layout in DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, layout) {
            return Some(dt);
        }
    }

    const DATE_LAYOUTS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];
    for layout in DATE_LAYOUTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, layout) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}
