use std::collections::HashMap;

use crate::domain::pipeline::EnrichedProcess;
use crate::domain::severity::Severity;

/// Sentinel shown for the unfiltered selection.
pub const ALL_COMPANIES: &str = "TODAS";

/// Company filter applied to the working set before aggregation. Filtering
/// never mutates the underlying records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanySelection {
    All,
    Company(String),
}

impl CompanySelection {
    /// Interpret a raw query value; a missing, blank, or sentinel value
    /// means "all". The name is normalized the same way the pipeline
    /// normalizes company names.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None => CompanySelection::All,
            Some(v) if v.is_empty() || v.eq_ignore_ascii_case(ALL_COMPANIES) => {
                CompanySelection::All
            }
            Some(v) => CompanySelection::Company(v.to_uppercase()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CompanySelection::All => ALL_COMPANIES,
            CompanySelection::Company(name) => name,
        }
    }

    fn matches(&self, company: Option<&str>) -> bool {
        match self {
            CompanySelection::All => true,
            CompanySelection::Company(name) => company == Some(name.as_str()),
        }
    }
}

/// Distinct normalized company names, ascending. Records without a company
/// never show up here; the sentinel is prepended by the page, not by us.
pub fn company_options(records: &[EnrichedProcess]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        if let Some(company) = record.company.as_deref() {
            if !names.iter().any(|known| known == company) {
                names.push(company.to_string());
            }
        }
    }
    names.sort();
    names
}

pub fn filter_by_company<'a>(
    records: &'a [EnrichedProcess],
    selection: &CompanySelection,
) -> Vec<&'a EnrichedProcess> {
    records
        .iter()
        .filter(|record| selection.matches(record.company.as_deref()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCount {
    pub company: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyBreakdown {
    pub rows: Vec<CompanyCount>,
    pub distinct_companies: usize,
    pub total_records: usize,
}

/// Record counts per company, descending; ties keep first-seen input order.
/// `total_records` counts every filtered record, including those without a
/// company name.
pub fn counts_by_company(records: &[&EnrichedProcess]) -> CompanyBreakdown {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<CompanyCount> = Vec::new();

    for record in records {
        if let Some(company) = record.company.as_deref() {
            match index.get(company) {
                Some(&at) => rows[at].count += 1,
                None => {
                    index.insert(company, rows.len());
                    rows.push(CompanyCount {
                        company: company.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    rows.sort_by(|a, b| b.count.cmp(&a.count));

    CompanyBreakdown {
        distinct_companies: rows.len(),
        total_records: records.len(),
        rows,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
    /// Share of the filtered non-null-status total, in percent.
    pub percent: f64,
}

/// Status counts with their share of the filtered total, descending. A zero
/// total yields an empty view rather than a division.
pub fn counts_by_status(records: &[&EnrichedProcess]) -> Vec<StatusCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<(String, usize)> = Vec::new();

    for record in records {
        if let Some(status) = record.status.as_deref() {
            match index.get(status) {
                Some(&at) => rows[at].1 += 1,
                None => {
                    index.insert(status, rows.len());
                    rows.push((status.to_string(), 1));
                }
            }
        }
    }

    let total: usize = rows.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut out: Vec<StatusCount> = rows
        .into_iter()
        .map(|(status, count)| StatusCount {
            status,
            count,
            percent: 100.0 * count as f64 / total as f64,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityCount {
    pub severity: Severity,
    pub count: usize,
}

/// Tier counts over the filtered set, descending; tiers with no records are
/// omitted rather than shown as zero.
pub fn counts_by_severity(records: &[&EnrichedProcess]) -> Vec<SeverityCount> {
    let mut out: Vec<SeverityCount> = [Severity::OnTrack, Severity::Delayed, Severity::Critical]
        .into_iter()
        .map(|tier| SeverityCount {
            severity: tier,
            count: records
                .iter()
                .filter(|record| record.severity == Some(tier))
                .count(),
        })
        .filter(|entry| entry.count > 0)
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// The `n` records with the most business days across the *unfiltered*
/// working set. Rows without a business-day count never rank; ties keep
/// input order.
pub fn top_overdue(records: &[EnrichedProcess], n: usize) -> Vec<&EnrichedProcess> {
    let mut ranked: Vec<&EnrichedProcess> = records
        .iter()
        .filter(|record| record.business_days.is_some())
        .collect();
    ranked.sort_by(|a, b| b.business_days.cmp(&a.business_days));
    ranked.truncate(n);
    ranked
}

/// Table order shared by the page and the export: most business days first,
/// rows without a count at the end.
pub fn process_table_rows<'a>(records: &[&'a EnrichedProcess]) -> Vec<&'a EnrichedProcess> {
    let mut rows = records.to_vec();
    rows.sort_by(|a, b| match (a.business_days, b.business_days) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    rows
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDays {
    pub status: String,
    pub days: i64,
}

/// Total business days sitting in each status over the filtered set,
/// descending. Rows without a status are excluded; rows without a
/// business-day count contribute nothing to their status.
pub fn days_parked_by_status(records: &[&EnrichedProcess]) -> Vec<StatusDays> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<StatusDays> = Vec::new();

    for record in records {
        if let Some(status) = record.status.as_deref() {
            let days = record.business_days.unwrap_or(0);
            match index.get(status) {
                Some(&at) => rows[at].days += days,
                None => {
                    index.insert(status, rows.len());
                    rows.push(StatusDays {
                        status: status.to_string(),
                        days,
                    });
                }
            }
        }
    }

    rows.sort_by(|a, b| b.days.cmp(&a.days));
    rows
}

/// Integer formatting with `.` as the thousands separator, as the
/// days-parked table displays and exports it.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    if value < 0 {
        format!("-{out}")
    } else {
        out
    }
}
