use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local};

use crate::errors::ServerError;
use crate::fetch::{ProcessRecord, SheetClient};

/// Last successful fetch: the raw rows plus when they were pulled.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub records: Vec<ProcessRecord>,
    pub fetched_at: DateTime<Local>,
}

/// Shared application state: the configured sheet URL and the in-memory
/// working set. Cheap to clone; the snapshot lives behind a mutex and is
/// rebuilt wholesale on refresh. Derivation is not cached here, it re-runs
/// on every request over the snapshot rows.
#[derive(Clone)]
pub struct AppState {
    sheet_url: String,
    snapshot: Arc<Mutex<Option<Snapshot>>>,
}

impl AppState {
    pub fn new(sheet_url: impl Into<String>) -> Self {
        Self {
            sheet_url: sheet_url.into(),
            snapshot: Arc::new(Mutex::new(None)),
        }
    }

    /// State pre-loaded with a snapshot, so handlers can be driven without
    /// touching the network.
    #[cfg(test)]
    pub fn with_snapshot(sheet_url: impl Into<String>, snapshot: Snapshot) -> Self {
        Self {
            sheet_url: sheet_url.into(),
            snapshot: Arc::new(Mutex::new(Some(snapshot))),
        }
    }

    /// Current working set. `refresh` drops the snapshot before fetching,
    /// so a failed refresh surfaces the error and never falls back to
    /// stale rows.
    pub fn load(&self, refresh: bool) -> Result<Snapshot, ServerError> {
        let mut slot = self
            .snapshot
            .lock()
            .map_err(|_| ServerError::InternalError)?;

        if refresh {
            *slot = None;
        }

        if let Some(snapshot) = slot.as_ref() {
            return Ok(snapshot.clone());
        }

        let client = SheetClient::new().map_err(|e| ServerError::FetchError(e.to_string()))?;
        let records = client
            .fetch_records(&self.sheet_url)
            .map_err(|e| ServerError::FetchError(e.to_string()))?;

        let snapshot = Snapshot {
            records,
            fetched_at: Local::now(),
        };
        *slot = Some(snapshot.clone());
        Ok(snapshot)
    }
}
