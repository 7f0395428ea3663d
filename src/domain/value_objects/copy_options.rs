//! Per-rule copy behavior

use serde::{Deserialize, Serialize};

/// What to do when the destination file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Replace the existing file (default)
    #[default]
    Overwrite,
    /// Leave the existing file alone
    Skip,
    /// Report an error record for this file
    Error,
}

/// Accepts `true`/`false` as well as the policy names.
#[derive(Deserialize)]
#[serde(untagged)]
enum OverwritePolicyDe {
    Flag(bool),
    Named(String),
}

impl<'de> Deserialize<'de> for OverwritePolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match OverwritePolicyDe::deserialize(deserializer)? {
            OverwritePolicyDe::Flag(true) => Ok(Self::Overwrite),
            OverwritePolicyDe::Flag(false) => Ok(Self::Skip),
            OverwritePolicyDe::Named(name) => match name.to_lowercase().as_str() {
                "overwrite" => Ok(Self::Overwrite),
                "skip" => Ok(Self::Skip),
                "error" => Ok(Self::Error),
                other => Err(serde::de::Error::unknown_variant(
                    other,
                    &["overwrite", "skip", "error"],
                )),
            },
        }
    }
}

/// Copy flags attached to every resolved rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyOptions {
    /// Copy the symlink target's contents instead of the link itself
    pub dereference: bool,
    pub overwrite: OverwritePolicy,
    /// Carry the source's access/modification times over
    pub preserve_timestamps: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            dereference: true,
            overwrite: OverwritePolicy::Overwrite,
            preserve_timestamps: true,
        }
    }
}
