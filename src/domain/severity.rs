/// Severity tier of a process, derived from elapsed business days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    OnTrack,
    Delayed,
    Critical,
}

impl Severity {
    /// Inclusive boundaries: up to 20 business days is on track, 21 through
    /// 30 is delayed, beyond that critical. Negative counts (anomalous data)
    /// fall into `OnTrack` and are left alone.
    pub fn classify(business_days: i64) -> Severity {
        if business_days <= 20 {
            Severity::OnTrack
        } else if business_days <= 30 {
            Severity::Delayed
        } else {
            Severity::Critical
        }
    }

    /// Display label, as it appears on the dashboard and in exports.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::OnTrack => "Em dias",
            Severity::Delayed => "Atraso",
            Severity::Critical => "Crítico",
        }
    }
}
