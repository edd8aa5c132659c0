use crate::fetch::models::ProcessRecord;
use crate::fetch::FetchError;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = "hiring-dashboard/0.1";

/// Pulls the recruitment sheet's CSV export over HTTP.
pub struct SheetClient {
    client: Client,
}

impl SheetClient {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Download the sheet and deserialize its rows. The whole fetch fails on
    /// network errors, non-success statuses, or a structurally broken CSV;
    /// bad *values* inside a row are dealt with later by the pipeline.
    pub fn fetch_records(&self, url: &str) -> Result<Vec<ProcessRecord>, FetchError> {
        eprintln!("⬇ Fetching sheet from {url}");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().map_err(|e| FetchError::Body(e.to_string()))?;

        let mut reader = csv::Reader::from_reader(body.as_bytes());
        let mut records = Vec::new();

        for row in reader.deserialize::<ProcessRecord>() {
            let record = row.map_err(|e| FetchError::Csv(e.to_string()))?;
            records.push(record.cleaned());
        }

        eprintln!("✅ Fetched {} rows", records.len());
        Ok(records)
    }
}
