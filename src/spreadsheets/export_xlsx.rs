use crate::domain::pipeline::EnrichedProcess;
use crate::domain::views::{format_thousands, StatusDays};
use crate::errors::{ResultResp, ServerError};
use crate::responses::xlsx_response;
use rust_xlsxwriter::Workbook;

// Column layouts are a download contract; do not reorder.
const PROCESS_HEADERS: [&str; 5] = ["Empresa", "Cargo", "Status", "Nível", "Qtd dias (úteis)"];
const DAYS_PARKED_HEADERS: [&str; 2] = ["Status", "Dias Parados"];

/// The processes table, in the order it is shown on the page.
pub fn export_processes_xlsx(rows: &[&EnrichedProcess]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in PROCESS_HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write header '{header}': {e}")))?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, row.company.as_deref().unwrap_or(""))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write company: {e}")))?;

        worksheet
            .write_string(r, 1, row.role.as_deref().unwrap_or(""))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write role: {e}")))?;

        worksheet
            .write_string(r, 2, row.status.as_deref().unwrap_or(""))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write status: {e}")))?;

        worksheet
            .write_string(r, 3, row.severity.map(|s| s.label()).unwrap_or(""))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write severity: {e}")))?;

        // Null business days stay a blank cell.
        if let Some(days) = row.business_days {
            worksheet
                .write_number(r, 4, days as f64)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write days: {e}")))?;
        }
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))?;

    xlsx_response(buffer, "Tabela_Processos.xlsx")
}

/// The days-parked-by-status table, values formatted the way the page
/// shows them (dot thousands separator).
pub fn export_days_parked_xlsx(rows: &[StatusDays]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in DAYS_PARKED_HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write header '{header}': {e}")))?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &row.status)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write status: {e}")))?;

        worksheet
            .write_string(r, 1, format_thousands(row.days))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write days: {e}")))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))?;

    xlsx_response(buffer, "Dias_Parados_Por_Status.xlsx")
}
