//! Session audit log.
//!
//! Mutating [`crate::hub::Hub`] operations take a `&mut AuditLog` and record
//! what they changed. The log lives for one process and is printed at the end
//! of a session; it is never persisted.

use std::fmt;

use chrono::{DateTime, Local};

/// One timestamped audit line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub at: DateTime<Local>,
    pub description: String,
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\n{}",
            self.at.format("%a %b %-d %H:%M:%S %Y"),
            self.description
        )
    }
}

#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, description: impl Into<String>) {
        let description = description.into();
        tracing::info!(target: "techhub::audit", "{description}");
        self.entries.push(AuditEntry {
            at: Local::now(),
            description,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AuditEntry> {
        self.entries.iter()
    }
}

impl fmt::Display for AuditLog {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order() {
        let mut log = AuditLog::new();
        log.record("first");
        log.record("second");

        let descriptions: Vec<_> = log.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second"]);
        assert!(log.iter().next().unwrap().at <= log.iter().nth(1).unwrap().at);
    }

    #[test]
    fn display_prints_date_then_description() {
        let mut log = AuditLog::new();
        log.record("Added user: Alice on the list of user!");

        let text = log.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Added user: Alice on the list of user!");
    }

    #[test]
    fn empty_log_displays_nothing() {
        assert_eq!(AuditLog::new().to_string(), "");
    }
}
