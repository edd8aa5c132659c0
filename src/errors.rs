use astra::Response;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, missing resources) or downstream layers (sheet fetch, XLSX encoding).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    FetchError(String),
    XlsxError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::FetchError(msg) => write!(f, "Sheet fetch failed: {msg}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
