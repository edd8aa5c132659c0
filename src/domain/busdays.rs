use chrono::{Datelike, NaiveDate, Weekday};

/// Count of weekdays (Monday through Friday) in the inclusive range
/// `[start, end]`. No holiday calendar is applied. A reversed range
/// counts as empty.
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    if start > end {
        return 0;
    }

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as i64
}
