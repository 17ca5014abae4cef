// errors.rs
use std::fmt;

/// Errors originating from routing, the remote spreadsheet fetches,
/// or the export writer.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    FetchError(String),
    SheetError(String),
    XlsxError(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::FetchError(msg) => write!(f, "Fetch Error: {msg}"),
            ServerError::SheetError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::XlsxError(msg) => write!(f, "Export Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
