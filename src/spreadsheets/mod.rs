mod export_xlsx;

pub use export_xlsx::{export_days_parked_xlsx, export_processes_xlsx};
