use crate::router::handle;
use crate::tests::utils::{get, sample_records, seeded_state};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn header<'a>(resp: &'a astra::Response, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .expect("missing header")
        .to_str()
        .unwrap()
}

#[test]
fn export_processes_returns_a_workbook() {
    let state = seeded_state(sample_records());

    let resp = handle(get("/export/processes"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), XLSX_MIME);
    assert!(header(&resp, "Content-Disposition").contains("Tabela_Processos.xlsx"));
}

#[test]
fn export_processes_respects_the_company_filter() {
    let state = seeded_state(sample_records());

    let resp = handle(get("/export/processes?empresa=ACME"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), XLSX_MIME);
}

#[test]
fn export_days_parked_returns_a_workbook() {
    let state = seeded_state(sample_records());

    let resp = handle(get("/export/days-parked"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), XLSX_MIME);
    assert!(header(&resp, "Content-Disposition").contains("Dias_Parados_Por_Status.xlsx"));
}

#[test]
fn export_of_an_empty_sheet_still_succeeds() {
    let state = seeded_state(Vec::new());

    let resp = handle(get("/export/processes"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), XLSX_MIME);
}
