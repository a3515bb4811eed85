//! Per-file outcome accounting
//!
//! Every discovered file ends the run with exactly one outcome. The run
//! summary is the explicit result list a host inspects instead of
//! scraping logs.

use std::path::PathBuf;

/// Terminal state of one discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Compiled; `units_written` of `units_emitted` units landed on disk.
    Compiled {
        units_emitted: usize,
        units_written: usize,
    },
    /// File could not be read or decoded.
    SkippedUnreadable,
    /// File name does not carry the configured source extension.
    SkippedUnrecognized,
    /// The compiler rejected the file.
    Failed,
}

/// One file paired with how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn new(path: impl Into<PathBuf>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Explicit result of a whole run, one outcome per discovered file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    /// Files that compiled, regardless of how many units reached disk.
    pub fn compiled(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Compiled { .. }))
            .count()
    }

    /// Files the compiler rejected.
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == FileStatus::Failed)
            .count()
    }

    /// Files skipped before compilation, unreadable or unrecognized.
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| {
                matches!(
                    o.status,
                    FileStatus::SkippedUnreadable | FileStatus::SkippedUnrecognized
                )
            })
            .count()
    }

    /// Total units written to disk across the run.
    pub fn units_written(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                FileStatus::Compiled { units_written, .. } => units_written,
                _ => 0,
            })
            .sum()
    }

    /// Whether any file failed to compile or to emit completely.
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| match o.status {
            FileStatus::Failed => true,
            FileStatus::Compiled {
                units_emitted,
                units_written,
            } => units_written < units_emitted,
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = RunSummary::new();
        assert_eq!(summary.compiled(), 0);
        assert_eq!(summary.failed(), 0);
        assert_eq!(summary.skipped(), 0);
        assert_eq!(summary.units_written(), 0);
        assert!(!summary.has_failures());
    }

    #[test]
    fn test_counts_by_status() {
        let mut summary = RunSummary::new();
        summary.push(FileOutcome::new(
            "a.scr",
            FileStatus::Compiled {
                units_emitted: 2,
                units_written: 2,
            },
        ));
        summary.push(FileOutcome::new("b.scr", FileStatus::Failed));
        summary.push(FileOutcome::new("c.txt", FileStatus::SkippedUnrecognized));
        summary.push(FileOutcome::new("d.scr", FileStatus::SkippedUnreadable));

        assert_eq!(summary.compiled(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.skipped(), 2);
        assert_eq!(summary.units_written(), 2);
        assert!(summary.has_failures());
    }

    #[test]
    fn test_partial_emission_counts_as_failure() {
        let mut summary = RunSummary::new();
        summary.push(FileOutcome::new(
            "a.scr",
            FileStatus::Compiled {
                units_emitted: 3,
                units_written: 1,
            },
        ));
        assert_eq!(summary.compiled(), 1);
        assert_eq!(summary.failed(), 0);
        assert!(summary.has_failures());
    }

    #[test]
    fn test_clean_run_has_no_failures() {
        let mut summary = RunSummary::new();
        summary.push(FileOutcome::new(
            "a.scr",
            FileStatus::Compiled {
                units_emitted: 1,
                units_written: 1,
            },
        ));
        summary.push(FileOutcome::new("b.md", FileStatus::SkippedUnrecognized));
        assert!(!summary.has_failures());
    }
}
