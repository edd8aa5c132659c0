use std::collections::HashMap;

use astra::Request;
use chrono::Local;

use crate::domain::pipeline::enrich_records;
use crate::domain::views::{
    company_options, counts_by_company, counts_by_severity, counts_by_status,
    days_parked_by_status, filter_by_company, process_table_rows, top_overdue, CompanySelection,
};
use crate::errors::{ResultResp, ServerError};
use crate::responses::html_response;
use crate::spreadsheets::{export_days_parked_xlsx, export_processes_xlsx};
use crate::state::AppState;
use crate::templates::pages::{dashboard_page, DashboardVm};

const TOP_OVERDUE_LIMIT: usize = 5;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => dashboard(&req, state),
        ("GET", "/export/processes") => export_processes(&req, state),
        ("GET", "/export/days-parked") => export_days_parked(&req, state),
        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let refresh = params.get("refresh").map(|v| v == "1").unwrap_or(false);
    let selection = CompanySelection::from_param(params.get("empresa").map(String::as_str));

    let snapshot = state.load(refresh)?;
    let enriched = enrich_records(&snapshot.records, Local::now().date_naive());
    let filtered = filter_by_company(&enriched, &selection);

    let vm = DashboardVm {
        companies: company_options(&enriched),
        updated_at: snapshot.fetched_at.format("%d/%m/%Y | %H:%M").to_string(),
        breakdown: counts_by_company(&filtered),
        statuses: counts_by_status(&filtered),
        severities: counts_by_severity(&filtered),
        // Always ranked over the full set, whatever the filter.
        top_overdue: top_overdue(&enriched, TOP_OVERDUE_LIMIT),
        table: process_table_rows(&filtered),
        days_parked: days_parked_by_status(&filtered),
        selection,
    };

    html_response(dashboard_page(&vm))
}

fn export_processes(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let selection = CompanySelection::from_param(params.get("empresa").map(String::as_str));

    let snapshot = state.load(false)?;
    let enriched = enrich_records(&snapshot.records, Local::now().date_naive());
    let filtered = filter_by_company(&enriched, &selection);
    let rows = process_table_rows(&filtered);

    export_processes_xlsx(&rows)
}

fn export_days_parked(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let selection = CompanySelection::from_param(params.get("empresa").map(String::as_str));

    let snapshot = state.load(false)?;
    let enriched = enrich_records(&snapshot.records, Local::now().date_naive());
    let filtered = filter_by_company(&enriched, &selection);
    let rows = days_parked_by_status(&filtered);

    export_days_parked_xlsx(&rows)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}
