//! Resolved rule entity
//!
//! A `Rule` with every path made absolute and every default materialized.
//! Resolved rules are immutable for the lifetime of one configuration and
//! are shared (`Arc`) between the asset map entries that reference them.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::path::{absolutize, basename, is_within, normalize_path};
use crate::domain::value_objects::{CopyOptions, GlobPattern, PatternSet, Rename};

/// Shared roots every rule is resolved against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncContext {
    /// Where relative source globs are anchored
    pub source_root: PathBuf,
    /// The theme root; relative destinations are anchored here
    pub theme_root: PathBuf,
    /// Canonical asset directory (default destination)
    pub asset_dir: PathBuf,
}

impl SyncContext {
    /// Build a context; `asset_dir` is relative to `theme_root` unless absolute.
    pub fn new(
        source_root: impl AsRef<Path>,
        theme_root: impl AsRef<Path>,
        asset_dir: impl AsRef<Path>,
    ) -> Self {
        let theme_root = normalize_path(theme_root.as_ref());
        let asset_dir = absolutize(&theme_root, asset_dir.as_ref());
        Self {
            source_root: normalize_path(source_root.as_ref()),
            theme_root,
            asset_dir,
        }
    }
}

/// How a resolved rule relates to a candidate source path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch {
    /// Matches `src` and is not ignored
    Included,
    /// Matches `src` but also an ignore pattern
    Ignored,
    NoMatch,
}

/// A fully resolved sync rule
#[derive(Debug, Clone)]
pub struct ResolvedRule {
    /// Declaration order, used for precedence
    pub index: usize,
    /// The glob as the user wrote it
    pub label: String,
    pub src: GlobPattern,
    /// Absolute destination directory
    pub dest: PathBuf,
    pub rename: Option<Rename>,
    pub ignore: PatternSet,
    /// Absolute cleanup glob anchored under `dest`, when enabled
    pub clean_match: Option<GlobPattern>,
    pub copy: CopyOptions,
}

impl ResolvedRule {
    pub fn classify(&self, path: &Path) -> RuleMatch {
        if !self.src.is_match(path) {
            RuleMatch::NoMatch
        } else if self.ignore.is_match(path) {
            RuleMatch::Ignored
        } else {
            RuleMatch::Included
        }
    }

    /// Destination file name for `source`, after rename.
    pub fn dest_name(&self, source: &Path) -> String {
        match &self.rename {
            Some(rename) => rename.apply(source),
            None => basename(source),
        }
    }

    /// Absolute, normalized destination path for `source`.
    ///
    /// `None` when the renamed path does not land strictly inside `dest`
    /// (an empty name, or one climbing out with `..`).
    pub fn destination_for(&self, source: &Path) -> Option<PathBuf> {
        let dest = normalize_path(&self.dest.join(self.dest_name(source)));
        is_within(&dest, &self.dest).then_some(dest)
    }

    /// Whether notifications from `dir` can concern this rule.
    pub fn covers_dir(&self, dir: &Path) -> bool {
        let base = self.src.base_dir();
        let dir = normalize_path(dir);
        if dir == base {
            return true;
        }
        match self.src.max_depth() {
            // `images/*/*.png` reaches one level below the base
            Some(depth) => depth > 1 && is_within(&dir, base),
            None => is_within(&dir, base),
        }
    }
}
