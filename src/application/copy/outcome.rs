//! Copy result types

use std::path::PathBuf;

/// What happened to a single destination file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Destination did not exist before
    Created(PathBuf),
    /// Destination existed and was replaced
    Updated(PathBuf),
    /// Destination existed and the rule says leave it
    Skipped(PathBuf),
    /// Copy failed; the error was already reported
    Failed(PathBuf),
}

impl CopyOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            CopyOutcome::Created(p)
            | CopyOutcome::Updated(p)
            | CopyOutcome::Skipped(p)
            | CopyOutcome::Failed(p) => p,
        }
    }

    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Created(_) | CopyOutcome::Updated(_))
    }
}

/// Tally of a copy batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl CopyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, outcome: CopyOutcome) {
        match outcome {
            CopyOutcome::Created(p) | CopyOutcome::Updated(p) => self.copied.push(p),
            CopyOutcome::Skipped(p) => self.skipped.push(p),
            CopyOutcome::Failed(p) => self.failed.push(p),
        }
    }

    /// Check if the batch completed without errors
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl FromIterator<CopyOutcome> for CopyReport {
    fn from_iter<I: IntoIterator<Item = CopyOutcome>>(iter: I) -> Self {
        let mut report = CopyReport::new();
        for outcome in iter {
            report.add(outcome);
        }
        report
    }
}
