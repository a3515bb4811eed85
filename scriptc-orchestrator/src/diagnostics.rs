//! Structured diagnostics
//!
//! Warnings and errors flow through a `DiagnosticSink` so the host build
//! tool decides where they land. The record shape - message, optional
//! source name, line, optional source line text, column - is the
//! externally observable diagnostic format.

use std::fmt;
use std::sync::Mutex;

/// Severity of a diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One structured warning/error record.
///
/// A record without a known location carries `None` for the text fields
/// and `-1` for the numeric fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub source_name: Option<String>,
    pub line: i32,
    pub line_source: Option<String>,
    pub column: i32,
}

impl Diagnostic {
    /// Create an error record with no location.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            source_name: None,
            line: -1,
            line_source: None,
            column: -1,
        }
    }

    /// Create a warning record with no location.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            source_name: None,
            line: -1,
            line_source: None,
            column: -1,
        }
    }

    /// Attach a source location to the record.
    pub fn at(
        mut self,
        source_name: impl Into<String>,
        line: i32,
        line_source: Option<String>,
        column: i32,
    ) -> Self {
        self.source_name = Some(source_name.into());
        self.line = line;
        self.line_source = line_source;
        self.column = column;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (source: {}, line: {}, column: {})",
            self.message,
            self.source_name.as_deref().unwrap_or("<none>"),
            self.line,
            self.column,
        )
    }
}

/// Sink accepting structured diagnostic records.
pub trait DiagnosticSink {
    /// Deliver one diagnostic record.
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink forwarding records to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => {
                tracing::warn!(target: "scriptc::diagnostics", "{diagnostic}");
            }
            Severity::Error => {
                tracing::error!(target: "scriptc::diagnostics", "{diagnostic}");
            }
        }
    }
}

/// Sink capturing records in memory.
///
/// Lets hosts and tests inspect diagnostics directly instead of scraping
/// log output.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records delivered so far.
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records.lock().expect("diagnostic sink poisoned").clone()
    }

    /// Number of error-severity records delivered so far.
    pub fn error_count(&self) -> usize {
        self.records()
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().expect("diagnostic sink poisoned").is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: Diagnostic) {
        self.records
            .lock()
            .expect("diagnostic sink poisoned")
            .push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_error_record() {
        let record = Diagnostic::error("boom");
        assert_eq!(record.severity, Severity::Error);
        assert_eq!(record.message, "boom");
        assert!(record.source_name.is_none());
        assert_eq!(record.line, -1);
        assert!(record.line_source.is_none());
        assert_eq!(record.column, -1);
    }

    #[test]
    fn test_record_with_location() {
        let record = Diagnostic::warning("odd").at("Main.scr", 3, Some("var x".into()), 7);
        assert_eq!(record.severity, Severity::Warning);
        assert_eq!(record.source_name.as_deref(), Some("Main.scr"));
        assert_eq!(record.line, 3);
        assert_eq!(record.column, 7);
    }

    #[test]
    fn test_display_format() {
        let record = Diagnostic::error("boom");
        let text = record.to_string();
        assert!(text.contains("boom"));
        assert!(text.contains("line: -1"));
    }

    #[test]
    fn test_memory_sink_captures_in_order() {
        let sink = MemorySink::new();
        sink.report(Diagnostic::warning("first"));
        sink.report(Diagnostic::error("second"));

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "first");
        assert_eq!(records[1].message, "second");
        assert_eq!(sink.error_count(), 1);
        assert!(!sink.is_empty());
    }
}
