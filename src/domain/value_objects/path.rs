//! Path canonicalization helpers
//!
//! Every set-membership check in the engine (dedup set, protected set,
//! watched set, stale set) goes through these helpers so that two spellings
//! of the same location compare equal:
//! - `.` components are dropped
//! - `..` components are resolved lexically (no symlink resolution)
//! - glob matching always sees forward slashes

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path.
///
/// Does not touch the file system, so it works for paths that do not exist
/// yet (destinations) and for paths that were just deleted (watch events).
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

/// Resolve `path` against `base` (when relative) and normalize the result.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}

/// Render a path with forward slashes, as expected by the glob engine.
pub fn to_slash(path: &Path) -> String {
    let s = path.to_string_lossy();
    if cfg!(windows) {
        s.replace('\\', "/")
    } else {
        s.into_owned()
    }
}

/// Strict containment check on normalized paths.
///
/// Equal paths are *not* within each other: a destination root equal to the
/// theme root is treated as "outside", so cleanup never empties the theme.
pub fn is_within(child: &Path, parent: &Path) -> bool {
    let child = normalize_path(child);
    let parent = normalize_path(parent);
    child != parent && child.starts_with(&parent)
}

/// The file name of `path` as an owned string (empty for `/` or `..`).
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
