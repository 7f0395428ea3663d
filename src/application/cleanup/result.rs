//! Cleanup result types

use std::path::PathBuf;

/// Result of a cleanup pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupResult {
    /// Files that were deleted
    pub deleted: Vec<PathBuf>,
    /// Files whose deletion failed (already reported)
    pub failed: Vec<PathBuf>,
    /// Set when the whole pass was skipped
    pub skipped: Option<String>,
}

impl CleanupResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self {
            skipped: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Add a deleted file
    pub fn add_deleted(&mut self, path: PathBuf) {
        self.deleted.push(path);
    }

    /// Add a failed deletion
    pub fn add_error(&mut self, path: PathBuf) {
        self.failed.push(path);
    }

    pub fn was_skipped(&self) -> bool {
        self.skipped.is_some()
    }

    /// Check if operation was successful
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
