use std::net::SocketAddr;

use astra::Server;

use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;

mod domain;
mod errors;
mod fetch;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

/// CSV export of the "Processo seletivo" sheet.
const DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1kA2sPD14H-A2ea7pg_0d_MOhe6uiGRT0/export?format=csv";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

fn main() {
    let sheet_url =
        std::env::var("SHEET_URL").unwrap_or_else(|_| DEFAULT_SHEET_URL.to_string());
    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let addr: SocketAddr = match bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Invalid BIND_ADDR '{bind_addr}': {e}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(sheet_url);

    println!("Starting server at http://{addr}");

    let server = Server::bind(addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
