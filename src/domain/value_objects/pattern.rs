//! Glob pattern value objects
//!
//! Wraps `globset` so rules can carry compiled matchers anchored at absolute
//! paths. Patterns are matched against forward-slash path strings and `*`
//! never crosses a directory separator.

use std::fmt;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};

use super::path::{absolutize, normalize_path, to_slash};
use crate::error::{SyncError, SyncResult};

/// `cleanMatch` values that would match virtually anything in a directory.
pub const GENERIC_CLEAN_PATTERNS: &[&str] = &["*", "**", "**/*", "*.*", "**/*.*"];

const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}'];
const EXTGLOB_PREFIXES: &[&str] = &["!(", "@(", "+("];

/// Whether a string contains glob syntax.
pub fn is_dynamic_pattern(pattern: &str) -> bool {
    pattern.contains(GLOB_META) || EXTGLOB_PREFIXES.iter().any(|p| pattern.contains(p))
}

/// Whether a `cleanMatch` is one of the reserved "match everything" forms.
pub fn is_generic_clean_pattern(pattern: &str) -> bool {
    let trimmed = pattern.trim().trim_start_matches("./");
    GENERIC_CLEAN_PATTERNS.contains(&trimmed)
}

fn compile(pattern: &str) -> SyncResult<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|e| SyncError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

/// Anchor a (possibly relative) pattern at `root` and normalize it.
fn anchor(root: &Path, pattern: &str) -> String {
    to_slash(&absolutize(root, Path::new(pattern)))
}

/// A compiled glob anchored at an absolute location.
#[derive(Clone)]
pub struct GlobPattern {
    raw: String,
    matcher: GlobMatcher,
    base: PathBuf,
    recursive: bool,
    depth: usize,
}

impl GlobPattern {
    /// Compile an absolute pattern.
    pub fn new(pattern: &str) -> SyncResult<Self> {
        let matcher = compile(pattern)?;

        let mut base = PathBuf::new();
        let mut dynamic: Vec<&str> = Vec::new();
        for (i, segment) in pattern.split('/').enumerate() {
            if dynamic.is_empty() && !is_dynamic_pattern(segment) {
                if i == 0 {
                    // "" for unix roots, "C:" for drive prefixes
                    base.push(format!("{segment}/"));
                } else {
                    base.push(segment);
                }
            } else {
                dynamic.push(segment);
            }
        }

        // A literal file path walks its parent directory.
        if dynamic.is_empty() {
            base.pop();
            dynamic.push("");
        }

        let recursive = dynamic.iter().any(|s| s.contains("**"));

        Ok(Self {
            raw: pattern.to_string(),
            matcher,
            base,
            recursive,
            depth: dynamic.len(),
        })
    }

    /// Compile `pattern` relative to `root`.
    pub fn anchored(root: &Path, pattern: &str) -> SyncResult<Self> {
        Self::new(&anchor(root, pattern))
    }

    /// The pattern text, absolute and forward-slashed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Longest literal directory prefix: the place to start walking.
    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    /// Maximum walk depth below `base_dir`, `None` when the pattern uses `**`.
    pub fn max_depth(&self) -> Option<usize> {
        if self.recursive {
            None
        } else {
            Some(self.depth)
        }
    }

    pub fn is_match(&self, path: &Path) -> bool {
        self.matcher.is_match(to_slash(&normalize_path(path)))
    }
}

impl fmt::Debug for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GlobPattern").field(&self.raw).finish()
    }
}

impl PartialEq for GlobPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

/// A set of ignore globs; an empty set matches nothing.
#[derive(Clone)]
pub struct PatternSet {
    patterns: Vec<String>,
    set: GlobSet,
}

impl PatternSet {
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            set: GlobSet::empty(),
        }
    }

    /// Compile patterns relative to `root`.
    pub fn anchored<S: AsRef<str>>(root: &Path, patterns: &[S]) -> SyncResult<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut anchored = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let absolute = anchor(root, pattern.as_ref());
            let glob = GlobBuilder::new(&absolute)
                .literal_separator(true)
                .build()
                .map_err(|e| SyncError::InvalidPattern {
                    pattern: pattern.as_ref().to_string(),
                    message: e.to_string(),
                })?;
            builder.add(glob);
            anchored.push(absolute);
        }

        let set = builder.build().map_err(|e| SyncError::InvalidPattern {
            pattern: anchored.join(", "),
            message: e.to_string(),
        })?;

        Ok(Self {
            patterns: anchored,
            set,
        })
    }

    pub fn is_match(&self, path: &Path) -> bool {
        !self.patterns.is_empty() && self.set.is_match(to_slash(&normalize_path(path)))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PatternSet").field(&self.patterns).finish()
    }
}
