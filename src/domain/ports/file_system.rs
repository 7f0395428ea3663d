//! FileSystem port - abstraction over file I/O operations
//!
//! The engine never calls `std::fs` directly; it goes through this trait so
//! the copy and cleanup logic can run against a local disk or a test double.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::{CopyOptions, GlobPattern, PatternSet};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl FsError {
    /// Classify an I/O error, keeping the offending path.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path),
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path),
            _ => FsError::Io { path, source: err },
        }
    }

    /// "Already gone" counts as success for deletions.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

/// A directory listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Abstract file system interface
///
/// Implementations must be shareable across the worker threads that run a
/// copy or delete batch.
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles wrapping `LocalFs` to inject failures
pub trait FileSystem: Send + Sync {
    /// Expand `pattern`, skipping paths matched by `ignore`.
    ///
    /// Returns files only, normalized, in a deterministic order.
    fn expand(
        &self,
        pattern: &GlobPattern,
        ignore: &PatternSet,
        follow_links: bool,
    ) -> FsResult<Vec<PathBuf>>;

    /// Check if a path exists (without following a dangling symlink)
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy contents (and metadata per `options`) from `from` to `to`.
    ///
    /// Overwrite policy is the caller's concern; this always replaces.
    fn copy(&self, from: &Path, to: &Path, options: &CopyOptions) -> FsResult<()>;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Top-level entries of `dir`
    fn list_dir(&self, dir: &Path) -> FsResult<Vec<ListedEntry>>;

    /// Read file content as string
    fn read_to_string(&self, path: &Path) -> FsResult<String>;
}
