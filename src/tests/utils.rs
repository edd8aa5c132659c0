use std::io::Read;

use astra::Body;
use chrono::Local;
use http::Method;

use crate::fetch::ProcessRecord;
use crate::state::{AppState, Snapshot};

/// A sheet URL that never resolves; tests that exercise the fetch path use
/// it to fail fast.
pub const UNREACHABLE_SHEET_URL: &str = "http://127.0.0.1:9/export?format=csv";

pub fn record(
    company: Option<&str>,
    role: Option<&str>,
    status: Option<&str>,
    opened: Option<&str>,
) -> ProcessRecord {
    ProcessRecord {
        company: company.map(str::to_string),
        role: role.map(str::to_string),
        status: status.map(str::to_string),
        opened_raw: opened.map(str::to_string),
    }
}

pub fn sample_records() -> Vec<ProcessRecord> {
    vec![
        record(Some("Acme"), Some("Analista"), Some("Aberto"), Some("2024-01-01")),
        record(Some("acme"), Some("Dev"), Some("Fechado"), None),
        record(Some("Globex"), Some("QA"), Some("Aberto"), Some("01/06/2024")),
        record(None, None, Some("Aberto"), Some("garbage")),
    ]
}

/// State pre-loaded with rows, so handlers never hit the network.
pub fn seeded_state(records: Vec<ProcessRecord>) -> AppState {
    AppState::with_snapshot(
        UNREACHABLE_SHEET_URL,
        Snapshot {
            records,
            fetched_at: Local::now(),
        },
    )
}

pub fn get(uri: &str) -> astra::Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::new(""))
        .unwrap()
}

pub fn body_string(resp: &mut astra::Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .unwrap();
    String::from_utf8(bytes).unwrap()
}
