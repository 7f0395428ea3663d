//! Watch change kinds and debouncing

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// What happened to a source path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileChangeKind {
    Create,
    Update,
    Delete,
}

impl FileChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileChangeKind::Create => "create",
            FileChangeKind::Update => "update",
            FileChangeKind::Delete => "delete",
        }
    }
}

impl std::fmt::Display for FileChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Watcher state for debouncing
///
/// Raw notifications only carry a path; the kind is decided by probing the
/// path once the burst has settled.
#[derive(Debug)]
pub struct WatcherState {
    pending_changes: BTreeSet<PathBuf>,
    last_change: Option<Instant>,
}

impl Default for WatcherState {
    fn default() -> Self {
        Self::new()
    }
}

impl WatcherState {
    /// Create a new watcher state
    pub fn new() -> Self {
        Self {
            pending_changes: BTreeSet::new(),
            last_change: None,
        }
    }

    /// Add a file change to pending changes
    pub fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    /// Check if debounce period has passed and we have pending changes
    pub fn should_sync(&self) -> bool {
        if let Some(last) = self.last_change {
            !self.pending_changes.is_empty() && last.elapsed() >= Duration::from_millis(DEBOUNCE_MS)
        } else {
            false
        }
    }

    /// Take all pending changes in path order, resetting state
    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        let changes: Vec<_> = std::mem::take(&mut self.pending_changes)
            .into_iter()
            .collect();
        self.last_change = None;
        changes
    }

    /// Check if there are pending changes
    pub fn has_pending(&self) -> bool {
        !self.pending_changes.is_empty()
    }
}
