//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::{self, FileTimes};
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult, ListedEntry};
use crate::domain::value_objects::path::normalize_path;
use crate::domain::value_objects::{CopyOptions, GlobPattern, PatternSet};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn expand(
        &self,
        pattern: &GlobPattern,
        ignore: &PatternSet,
        follow_links: bool,
    ) -> FsResult<Vec<PathBuf>> {
        let base = pattern.base_dir();
        if !base.is_dir() {
            return Ok(Vec::new());
        }

        // Plain directory walk: no .gitignore or hidden-file filtering, the
        // glob alone decides.
        let walker = WalkBuilder::new(base)
            .standard_filters(false)
            .follow_links(follow_links)
            .max_depth(pattern.max_depth())
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            // Unreadable entries are skipped, not fatal to the scan
            let Ok(entry) = entry else { continue };
            if entry.depth() == 0 {
                continue;
            }
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                continue;
            }

            let path = normalize_path(entry.path());
            if pattern.is_match(&path) && !ignore.is_match(&path) {
                files.push(path);
            }
        }

        Ok(files)
    }

    fn exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::io(path, e))
    }

    fn copy(&self, from: &Path, to: &Path, options: &CopyOptions) -> FsResult<()> {
        let meta = fs::symlink_metadata(from).map_err(|e| FsError::io(from, e))?;

        if meta.file_type().is_symlink() && !options.dereference {
            return copy_link(from, to);
        }

        fs::copy(from, to).map_err(|e| FsError::io(to, e))?;

        if options.preserve_timestamps {
            preserve_times(from, to)?;
        }

        Ok(())
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        fs::remove_file(path).map_err(|e| FsError::io(path, e))
    }

    fn list_dir(&self, dir: &Path) -> FsResult<Vec<ListedEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| FsError::io(dir, e))? {
            let entry = entry.map_err(|e| FsError::io(dir, e))?;
            let path = entry.path();
            // Follow links so a linked directory is still a directory
            let is_dir = path.is_dir();
            entries.push(ListedEntry {
                path: normalize_path(&path),
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        fs::read_to_string(path).map_err(|e| FsError::io(path, e))
    }
}

fn preserve_times(from: &Path, to: &Path) -> FsResult<()> {
    let meta = fs::metadata(from).map_err(|e| FsError::io(from, e))?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }

    let file = fs::OpenOptions::new()
        .write(true)
        .open(to)
        .map_err(|e| FsError::io(to, e))?;
    file.set_times(times).map_err(|e| FsError::io(to, e))
}

#[cfg(unix)]
fn copy_link(from: &Path, to: &Path) -> FsResult<()> {
    let target = fs::read_link(from).map_err(|e| FsError::io(from, e))?;
    match fs::remove_file(to) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(FsError::io(to, e)),
    }
    std::os::unix::fs::symlink(&target, to).map_err(|e| FsError::io(to, e))
}

#[cfg(not(unix))]
fn copy_link(from: &Path, to: &Path) -> FsResult<()> {
    // Creating links needs privileges on some platforms; copy the target instead
    fs::copy(from, to).map(|_| ()).map_err(|e| FsError::io(to, e))
}
