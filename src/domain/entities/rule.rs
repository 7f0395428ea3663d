//! Rule entity - a user-declared sync target
//!
//! A rule maps a source glob to a destination directory. A bare string is a
//! rule with every option left at its default.

use std::path::PathBuf;

use crate::domain::value_objects::{CopyOptions, OverwritePolicy, Rename};

/// A sync rule as declared by the user
#[derive(Debug, Clone, Default)]
pub struct Rule {
    /// Source glob, relative to the source root unless absolute
    pub src: String,
    /// Destination directory, relative to the theme root (default: asset dir)
    pub dest: Option<PathBuf>,
    pub rename: Option<Rename>,
    /// Globs excluded from `src`, relative to the source root
    pub ignore: Vec<String>,
    /// Cleanup glob, relative to `dest`
    pub clean_match: Option<String>,
    pub copy: CopyOptions,
}

impl Rule {
    /// Create a rule with default options
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    pub fn with_dest(mut self, dest: impl Into<PathBuf>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    pub fn with_rename(mut self, rename: Rename) -> Self {
        self.rename = Some(rename);
        self
    }

    pub fn with_ignore<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_clean_match(mut self, pattern: impl Into<String>) -> Self {
        self.clean_match = Some(pattern.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: OverwritePolicy) -> Self {
        self.copy.overwrite = overwrite;
        self
    }

    pub fn with_dereference(mut self, dereference: bool) -> Self {
        self.copy.dereference = dereference;
        self
    }

    pub fn with_preserve_timestamps(mut self, preserve: bool) -> Self {
        self.copy.preserve_timestamps = preserve;
        self
    }
}

impl From<&str> for Rule {
    fn from(src: &str) -> Self {
        Rule::new(src)
    }
}

impl From<String> for Rule {
    fn from(src: String) -> Self {
        Rule::new(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_string_takes_defaults() {
        let rule = Rule::from("images/*.png");
        assert_eq!(rule.src, "images/*.png");
        assert!(rule.dest.is_none());
        assert!(rule.rename.is_none());
        assert!(rule.ignore.is_empty());
        assert!(rule.clean_match.is_none());
        assert_eq!(rule.copy, CopyOptions::default());
    }

    #[test]
    fn builder_sets_fields() {
        let rule = Rule::new("icons/*.svg")
            .with_dest("snippets")
            .with_ignore(["icons/draft-*"])
            .with_clean_match("icon-*.liquid")
            .with_overwrite(OverwritePolicy::Error)
            .with_dereference(false)
            .with_preserve_timestamps(false);

        assert_eq!(rule.dest, Some(PathBuf::from("snippets")));
        assert_eq!(rule.ignore, vec!["icons/draft-*".to_string()]);
        assert_eq!(rule.clean_match.as_deref(), Some("icon-*.liquid"));
        assert_eq!(rule.copy.overwrite, OverwritePolicy::Error);
        assert!(!rule.copy.dereference);
        assert!(!rule.copy.preserve_timestamps);
    }
}
