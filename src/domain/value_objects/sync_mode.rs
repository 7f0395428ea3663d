//! Sync mode value object
//!
//! - `Build`: one-shot build, exits after a single cycle
//! - `Watch`: rebuild-on-change build, long-lived
//! - `Serve`: dev server, long-lived

use serde::{Deserialize, Serialize};

/// The host run mode the session is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    #[default]
    Build,
    Watch,
    Serve,
}

impl SyncMode {
    /// Long-lived modes react to file-system notifications.
    pub fn is_long_lived(&self) -> bool {
        matches!(self, SyncMode::Watch | SyncMode::Serve)
    }
}

impl std::fmt::Display for SyncMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncMode::Build => write!(f, "build"),
            SyncMode::Watch => write!(f, "watch"),
            SyncMode::Serve => write!(f, "serve"),
        }
    }
}
