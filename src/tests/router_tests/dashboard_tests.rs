use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, get, sample_records, seeded_state, UNREACHABLE_SHEET_URL};

#[test]
fn dashboard_renders_normalized_companies() {
    let state = seeded_state(sample_records());

    let mut resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    // Both spellings of Acme collapse into the normalized name.
    assert!(body.contains("ACME"));
    assert!(body.contains("GLOBEX"));
    assert!(!body.contains("Acme"));
    assert!(body.contains("Total de empresas cadastradas"));
    assert!(body.contains("Total de processos cadastrados"));
    assert!(body.contains("Data Atualização"));
}

#[test]
fn dashboard_filters_by_company_param() {
    let state = seeded_state(sample_records());

    let mut resp = handle(get("/?empresa=acme"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Status dos Processos - ACME"));
    assert!(body.contains("Níveis dos Processos - ACME"));
}

#[test]
fn dashboard_sentinel_selection_is_unfiltered() {
    let state = seeded_state(sample_records());

    let mut resp = handle(get("/?empresa=TODAS"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Status dos Processos - TODAS"));
}

#[test]
fn dashboard_renders_empty_sheet() {
    let state = seeded_state(Vec::new());

    let mut resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Nenhum processo para exibir."));
}

#[test]
fn unknown_route_is_not_found() {
    let state = seeded_state(sample_records());

    let result = handle(get("/nope"), &state);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn fetch_failure_is_surfaced() {
    let state = AppState::new(UNREACHABLE_SHEET_URL);

    let result = handle(get("/"), &state);
    assert!(matches!(result, Err(ServerError::FetchError(_))));
}

#[test]
fn failed_refresh_does_not_fall_back_to_stale_rows() {
    let state = seeded_state(sample_records());

    // The refresh drops the snapshot, then the re-fetch fails.
    let result = handle(get("/?refresh=1"), &state);
    assert!(matches!(result, Err(ServerError::FetchError(_))));

    // Later requests keep failing instead of showing the old data.
    let result = handle(get("/"), &state);
    assert!(matches!(result, Err(ServerError::FetchError(_))));
}
