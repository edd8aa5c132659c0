use serde::Deserialize;

/// One row of the "Processo seletivo" sheet, as it comes out of the CSV
/// export. Every column is optional: the sheet is hand-maintained and any
/// cell can be blank. Columns we do not know about are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRecord {
    #[serde(rename = "Empresa", default)]
    pub company: Option<String>,
    #[serde(rename = "Cargo", default)]
    pub role: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Data de abertura", default)]
    pub opened_raw: Option<String>,
}

impl ProcessRecord {
    /// Collapse whitespace-only cells into `None`; the CSV layer already
    /// maps truly empty cells there.
    pub fn cleaned(self) -> Self {
        Self {
            company: clean(self.company),
            role: clean(self.role),
            status: clean(self.status),
            opened_raw: clean(self.opened_raw),
        }
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
