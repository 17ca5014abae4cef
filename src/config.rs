// src/config.rs
use std::env;

/// Runtime configuration, read once at startup.
///
/// The two sheet URLs point at published spreadsheet documents: one holding
/// the login credential rows, one holding the vehicle rows of the yard.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Spreadsheet with the vehicle rows ("Placa", "Data da Remoção", ...).
    pub patio_sheet_url: String,
    /// Spreadsheet with the credential rows ("usuario", "senha").
    pub login_sheet_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let patio_sheet_url = env::var("PATIO_SHEET_URL")
            .map_err(|_| "PATIO_SHEET_URL is not set".to_string())?;
        let login_sheet_url = env::var("LOGIN_SHEET_URL")
            .map_err(|_| "LOGIN_SHEET_URL is not set".to_string())?;
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        Ok(Self {
            patio_sheet_url,
            login_sheet_url,
            bind_addr,
        })
    }
}
