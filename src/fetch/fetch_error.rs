use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    Network(String),
    Status(u16),
    Body(String),
    Csv(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Status(code) => write!(f, "Source returned HTTP {code}"),
            FetchError::Body(msg) => write!(f, "Failed to read response body: {msg}"),
            FetchError::Csv(msg) => write!(f, "CSV parse error: {msg}"),
        }
    }
}

impl Error for FetchError {}
