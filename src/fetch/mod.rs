mod fetch_error;
mod models;
mod sheets;

pub use fetch_error::FetchError;
pub use models::ProcessRecord;
pub use sheets::SheetClient;
