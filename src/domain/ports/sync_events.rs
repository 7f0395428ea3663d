//! Sync Event Port
//!
//! The engine reports everything it does (copies, deletions, skipped
//! duplicates, warnings, per-file failures) as events on this port. Nothing
//! in the core prints or fails the host; sinks decide how to surface events.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::SyncMode;

/// Kind tag of a sync event, as it appears in the log stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CycleStart,
    Create,
    Update,
    Delete,
    DuplicateIgnored,
    Ignored,
    Warning,
    Error,
    CycleFinish,
    Shutdown,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::CycleStart => "cycle-start",
            EventKind::Create => "create",
            EventKind::Update => "update",
            EventKind::Delete => "delete",
            EventKind::DuplicateIgnored => "duplicate-ignored",
            EventKind::Ignored => "ignored",
            EventKind::Warning => "warning",
            EventKind::Error => "error",
            EventKind::CycleFinish => "cycle-finish",
            EventKind::Shutdown => "shutdown",
        }
    }

    /// Per-file chatter, suppressed when the session is silent
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            EventKind::Create
                | EventKind::Update
                | EventKind::Delete
                | EventKind::DuplicateIgnored
                | EventKind::Ignored
        )
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted by the sync engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// A cycle started; the asset map was rebuilt
    CycleStarted { mode: SyncMode, entries: usize },

    /// Destination file created
    Created { path: PathBuf, source: PathBuf },

    /// Existing destination file replaced
    Updated { path: PathBuf, source: PathBuf },

    /// Destination file deleted
    Deleted { path: PathBuf },

    /// A source lost a destination collision and was left out
    DuplicateIgnored { path: PathBuf, dest: PathBuf },

    /// A changed path matched a rule but also its ignore patterns
    Ignored { path: PathBuf },

    /// Advisory, never fatal
    Warning {
        message: String,
        path: Option<PathBuf>,
    },

    /// A single file operation failed; `cause` is dropped when silent
    Error {
        message: String,
        path: PathBuf,
        cause: Option<String>,
    },

    /// Cycle completed
    CycleFinished {
        copied: usize,
        skipped: usize,
        deleted: usize,
        errors: usize,
    },

    /// Session shut down
    Shutdown,
}

impl SyncEvent {
    pub fn warning(message: impl Into<String>) -> Self {
        SyncEvent::Warning {
            message: message.into(),
            path: None,
        }
    }

    pub fn warning_at(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        SyncEvent::Warning {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn error(message: impl Into<String>, path: impl Into<PathBuf>, cause: String) -> Self {
        SyncEvent::Error {
            message: message.into(),
            path: path.into(),
            cause: Some(cause),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            SyncEvent::CycleStarted { .. } => EventKind::CycleStart,
            SyncEvent::Created { .. } => EventKind::Create,
            SyncEvent::Updated { .. } => EventKind::Update,
            SyncEvent::Deleted { .. } => EventKind::Delete,
            SyncEvent::DuplicateIgnored { .. } => EventKind::DuplicateIgnored,
            SyncEvent::Ignored { .. } => EventKind::Ignored,
            SyncEvent::Warning { .. } => EventKind::Warning,
            SyncEvent::Error { .. } => EventKind::Error,
            SyncEvent::CycleFinished { .. } => EventKind::CycleFinish,
            SyncEvent::Shutdown => EventKind::Shutdown,
        }
    }

    /// Primary path of the record
    pub fn path(&self) -> Option<&Path> {
        match self {
            SyncEvent::Created { path, .. }
            | SyncEvent::Updated { path, .. }
            | SyncEvent::Deleted { path }
            | SyncEvent::DuplicateIgnored { path, .. }
            | SyncEvent::Ignored { path }
            | SyncEvent::Error { path, .. } => Some(path.as_path()),
            SyncEvent::Warning { path, .. } => path.as_deref(),
            _ => None,
        }
    }

    /// Secondary path: copy source, or the contested destination
    pub fn related_path(&self) -> Option<&Path> {
        match self {
            SyncEvent::Created { source, .. } | SyncEvent::Updated { source, .. } => {
                Some(source.as_path())
            }
            SyncEvent::DuplicateIgnored { dest, .. } => Some(dest.as_path()),
            _ => None,
        }
    }
}

/// Trait for receiving sync events
///
/// Implementations can be:
/// - ConsoleEventSink: timestamped lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
///
/// Events arrive from worker threads during copy and delete batches.
pub trait SyncEventSink: Send + Sync {
    /// Handle a sync event
    fn on_event(&self, event: SyncEvent);

    /// Flush buffered output (called on shutdown)
    fn flush(&self) {}
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {
        // Do nothing
    }
}

impl<T: SyncEventSink + ?Sized> SyncEventSink for std::sync::Arc<T> {
    fn on_event(&self, event: SyncEvent) {
        (**self).on_event(event)
    }

    fn flush(&self) {
        (**self).flush()
    }
}
