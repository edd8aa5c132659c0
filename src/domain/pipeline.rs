use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::busdays::business_days_between;
use crate::domain::severity::Severity;
use crate::fetch::ProcessRecord;

/// A process row with its derived metrics. Built once per pipeline run from
/// the raw record and immutable afterwards; the whole set is discarded and
/// recomputed on refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedProcess {
    /// Upper-cased company name; the grouping key everywhere.
    pub company: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub opened_on: Option<NaiveDate>,
    /// Naive calendar-day count. Carried alongside the business-day count
    /// but drives nothing downstream.
    pub calendar_days: Option<i64>,
    pub business_days: Option<i64>,
    pub severity: Option<Severity>,
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d/%m/%y"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
];

/// Parse an opening date as typed into the sheet: ISO or Brazilian day-first,
/// with or without a time suffix. Anything else is `None`.
pub fn parse_opening_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(stamp.date());
        }
    }

    None
}

/// Derive the working set from raw rows. One output per input, in input
/// order; a row whose date does not parse degrades to null metrics instead
/// of failing the batch. Pure given `today`, which callers inject.
pub fn enrich_records(records: &[ProcessRecord], today: NaiveDate) -> Vec<EnrichedProcess> {
    records
        .iter()
        .map(|record| {
            let opened_on = record.opened_raw.as_deref().and_then(parse_opening_date);
            let calendar_days = opened_on.map(|opened| (today - opened).num_days());
            let business_days = opened_on.map(|opened| business_days_between(opened, today));
            let severity = business_days.map(Severity::classify);

            EnrichedProcess {
                company: record.company.as_deref().map(str::to_uppercase),
                role: record.role.clone(),
                status: record.status.clone(),
                opened_on,
                calendar_days,
                business_days,
                severity,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(company: Option<&str>, status: Option<&str>, opened: Option<&str>) -> ProcessRecord {
        ProcessRecord {
            company: company.map(str::to_string),
            role: None,
            status: status.map(str::to_string),
            opened_raw: opened.map(str::to_string),
        }
    }

    #[test]
    fn accepts_the_sheet_date_formats() {
        assert_eq!(parse_opening_date("2024-01-05"), Some(date(2024, 1, 5)));
        assert_eq!(parse_opening_date("05/01/2024"), Some(date(2024, 1, 5)));
        assert_eq!(parse_opening_date("05/01/24"), Some(date(2024, 1, 5)));
        assert_eq!(
            parse_opening_date("2024-01-05 10:30:00"),
            Some(date(2024, 1, 5))
        );
        assert_eq!(parse_opening_date(" 2024-01-05 "), Some(date(2024, 1, 5)));
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_opening_date("not a date"), None);
        assert_eq!(parse_opening_date("2024-13-40"), None);
        assert_eq!(parse_opening_date(""), None);
    }

    #[test]
    fn output_length_matches_input_length() {
        let records = vec![
            record(Some("Acme"), Some("Aberto"), Some("2024-01-01")),
            record(None, None, Some("garbage")),
            record(Some("Globex"), None, None),
        ];

        let enriched = enrich_records(&records, date(2024, 2, 1));
        assert_eq!(enriched.len(), records.len());
    }

    #[test]
    fn bad_date_degrades_to_null_metrics_only() {
        let records = vec![record(Some("Acme"), Some("Aberto"), Some("??"))];
        let enriched = enrich_records(&records, date(2024, 2, 1));

        let row = &enriched[0];
        assert_eq!(row.company.as_deref(), Some("ACME"));
        assert_eq!(row.opened_on, None);
        assert_eq!(row.calendar_days, None);
        assert_eq!(row.business_days, None);
        assert_eq!(row.severity, None);
    }

    #[test]
    fn derives_metrics_from_the_opening_date() {
        let records = vec![record(Some("acme"), Some("Aberto"), Some("2024-01-01"))];
        // 2024-02-01 is a Thursday.
        let enriched = enrich_records(&records, date(2024, 2, 1));

        let row = &enriched[0];
        assert_eq!(row.company.as_deref(), Some("ACME"));
        assert_eq!(row.opened_on, Some(date(2024, 1, 1)));
        assert_eq!(row.calendar_days, Some(31));
        assert_eq!(row.business_days, Some(24));
        assert_eq!(row.severity, Some(Severity::Delayed));
    }

    #[test]
    fn future_opening_dates_propagate_without_special_casing() {
        let records = vec![record(Some("Acme"), None, Some("2024-03-01"))];
        let enriched = enrich_records(&records, date(2024, 2, 1));

        let row = &enriched[0];
        assert_eq!(row.calendar_days, Some(-29));
        // Reversed range counts no business days, which classifies on track.
        assert_eq!(row.business_days, Some(0));
        assert_eq!(row.severity, Some(Severity::OnTrack));
    }

    #[test]
    fn enriched_set_flows_through_the_views() {
        use crate::domain::views::{
            counts_by_company, counts_by_status, filter_by_company, CompanySelection,
        };

        let records = vec![
            record(Some("Acme"), Some("Open"), Some("2024-01-01")),
            record(Some("acme"), Some("Closed"), None),
        ];
        let enriched = enrich_records(&records, date(2024, 2, 1));

        assert_eq!(enriched[0].business_days, Some(24));
        assert_eq!(enriched[1].calendar_days, None);
        assert_eq!(enriched[1].business_days, None);
        assert_eq!(enriched[1].severity, None);

        // Both spellings group under the normalized name, filtered or not.
        let all = filter_by_company(&enriched, &CompanySelection::All);
        assert_eq!(all.len(), 2);
        let acme = filter_by_company(&enriched, &CompanySelection::from_param(Some("ACME")));
        assert_eq!(acme.len(), 2);

        let breakdown = counts_by_company(&all);
        assert_eq!(breakdown.rows.len(), 1);
        assert_eq!(breakdown.rows[0].company, "ACME");
        assert_eq!(breakdown.rows[0].count, 2);

        let statuses = counts_by_status(&all);
        assert_eq!(statuses.len(), 2);
        assert!(statuses.iter().all(|s| s.count == 1));
        assert!(statuses.iter().all(|s| (s.percent - 50.0).abs() < 1e-9));
    }

    #[test]
    fn rerun_with_the_same_today_is_identical() {
        let records = vec![
            record(Some("Acme"), Some("Aberto"), Some("2024-01-01")),
            record(Some("acme"), Some("Fechado"), None),
        ];
        let today = date(2024, 2, 1);

        assert_eq!(
            enrich_records(&records, today),
            enrich_records(&records, today)
        );
    }
}
