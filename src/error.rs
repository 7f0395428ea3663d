//! Error types for themesync
//!
//! Uses `thiserror` for library errors. Only configuration problems are
//! surfaced as errors; per-file I/O failures become event records instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for themesync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Main error type for themesync operations
#[derive(Error, Debug)]
pub enum SyncError {
    /// A rule's destination is a glob pattern rather than a concrete directory
    #[error("target '{rule}' uses a dynamic pattern as destination: '{dest}'")]
    DynamicDestination { rule: String, dest: String },

    /// Glob pattern failed to compile
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// File watcher backend failure
    #[error("watcher error: {0}")]
    Watch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<notify::Error> for SyncError {
    fn from(err: notify::Error) -> Self {
        SyncError::Watch(err.to_string())
    }
}
