//! Calculator output as label/value rows, ready for a host to print or serialize.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: String,
    /// Formatted value or sentinel label.
    pub value: String,
    /// Set when the row breaks a configured limit (e.g. resistor dissipation).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub flagged: bool,
}

/// Result of one calculator run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub rows: Vec<ReportRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn row(&mut self, label: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(label, value, false)
    }

    pub fn flagged_row(
        &mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        flagged: bool,
    ) -> &mut Self {
        self.push(label, value, flagged)
    }

    pub fn note(&mut self, note: impl Into<String>) -> &mut Self {
        self.notes.push(note.into());
        self
    }

    /// Value of the first row with this label.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }

    pub fn any_flagged(&self) -> bool {
        self.rows.iter().any(|r| r.flagged)
    }

    fn push(
        &mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        flagged: bool,
    ) -> &mut Self {
        self.rows.push(ReportRow {
            label: label.into(),
            value: value.into(),
            flagged,
        });
        self
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        let width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);
        for row in &self.rows {
            let pad = width - row.label.chars().count();
            write!(f, "  {}{}  {}", row.label, " ".repeat(pad), row.value)?;
            if row.flagged {
                write!(f, "  ⚠")?;
            }
            writeln!(f)?;
        }
        for note in &self.notes {
            writeln!(f, "  note: {note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_text() {
        let mut report = Report::new("Demo");
        report.row("Γ", "0.2").flagged_row("VSWR", "1.5", true);
        report.note("check me");
        let text = report.to_string();
        assert_eq!(text, "Demo\n  Γ     0.2\n  VSWR  1.5  ⚠\n  note: check me\n");
    }

    #[test]
    fn lookup_and_flags() {
        let mut report = Report::new("Demo");
        report.row("a", "1");
        assert_eq!(report.value("a"), Some("1"));
        assert_eq!(report.value("b"), None);
        assert!(!report.any_flagged());
    }

    #[test]
    fn json_omits_empty_fields() {
        let mut report = Report::new("Demo");
        report.row("a", "1");
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"title":"Demo","rows":[{"label":"a","value":"1"}]}"#);
    }
}
