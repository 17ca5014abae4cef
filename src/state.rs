// src/state.rs
use crate::auth::SessionStore;
use crate::config::AppConfig;
use crate::sheets::SheetSource;

/// Everything the request handlers share. Passed by reference into the
/// router; no record data lives here, vehicle lists are fetched, derived,
/// and dropped within a single request.
pub struct AppState {
    pub config: AppConfig,
    pub sessions: SessionStore,
    pub sheets: Box<dyn SheetSource>,
}

impl AppState {
    pub fn new(config: AppConfig, sheets: Box<dyn SheetSource>) -> Self {
        Self {
            config,
            sessions: SessionStore::new(),
            sheets,
        }
    }
}
