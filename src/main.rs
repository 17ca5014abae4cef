use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::sheets::{HttpSheetSource, SheetSource};
use crate::state::AppState;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod auth;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod sheets;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Configuration comes from the environment (sheet URLs, bind addr)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ One shared HTTP client for the spreadsheet fetches
    let sheets: Box<dyn SheetSource> = match HttpSheetSource::new() {
        Ok(source) => Box::new(source),
        Err(e) => {
            eprintln!("❌ HTTP client initialization failed: {e}");
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Invalid BIND_ADDR '{}': {e}", config.bind_addr);
            std::process::exit(1);
        }
    };

    println!("Starting server at http://{addr}");

    let state = Arc::new(AppState::new(config, sheets));
    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing shared state into the closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
