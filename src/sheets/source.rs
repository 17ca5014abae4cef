// src/sheets/source.rs
use crate::errors::ServerError;
use crate::sheets::{CellValue, RawRow};
use calamine::{Data, Reader, Xlsx};
use reqwest::blocking::Client;
use std::io::Cursor;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Where spreadsheet rows come from. The router only ever sees this trait,
/// so tests can hand it canned rows instead of hitting the network.
pub trait SheetSource: Send + Sync {
    fn fetch_rows(&self, url: &str) -> Result<Vec<RawRow>, ServerError>;
}

/// Production source: one blocking GET per call, no retry, no caching.
/// Every page load re-fetches and re-derives everything from scratch.
pub struct HttpSheetSource {
    client: Client,
}

impl HttpSheetSource {
    pub fn new() -> Result<Self, ServerError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| ServerError::FetchError(e.to_string()))?;

        Ok(Self { client })
    }
}

impl SheetSource for HttpSheetSource {
    fn fetch_rows(&self, url: &str) -> Result<Vec<RawRow>, ServerError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ServerError::FetchError(format!("GET {url} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(ServerError::FetchError(format!(
                "GET {url} returned HTTP {}",
                resp.status()
            )));
        }

        let bytes = resp
            .bytes()
            .map_err(|e| ServerError::FetchError(format!("reading body failed: {e}")))?;

        parse_workbook(&bytes)
    }
}

/// Parse the first worksheet of an xlsx document into rows. The first sheet
/// row is the header; each following row becomes a `RawRow` keyed by those
/// header names. Blank cells are skipped entirely so "missing" stays
/// distinguishable from an empty string.
pub fn parse_workbook(bytes: &[u8]) -> Result<Vec<RawRow>, ServerError> {
    let mut workbook = Xlsx::new(Cursor::new(bytes.to_vec()))
        .map_err(|e| ServerError::SheetError(format!("workbook open failed: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ServerError::SheetError("workbook has no sheets".to_string()))?
        .map_err(|e| ServerError::SheetError(format!("sheet read failed: {e}")))?;

    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect(),
        None => return Ok(Vec::new()),
    };

    let mut out = Vec::new();
    for sheet_row in rows {
        let mut row = RawRow::new();
        for (i, cell) in sheet_row.iter().enumerate() {
            let Some(name) = headers.get(i) else { break };
            if name.is_empty() {
                continue;
            }
            if let Some(value) = convert_cell(cell) {
                row.push(name.clone(), value);
            }
        }
        if !row.is_empty() {
            out.push(row);
        }
    }

    Ok(out)
}

fn convert_cell(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::Float(n) => Some(CellValue::Number(*n)),
        Data::Int(n) => Some(CellValue::Number(*n as f64)),
        // Date-formatted cells come back as their underlying serial number,
        // which is exactly what the normalizer decodes.
        Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
        Data::Bool(b) => Some(CellValue::Text(b.to_string())),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(CellValue::Text(s.to_string()))
            }
        }
        Data::Error(_) => None,
    }
}
