//! Configuration module for themesync
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (THEMESYNC_*)
//! 3. Project config (themesync.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{parse_with_warnings, with_overrides_from, DEFAULT_CONFIG_FILE};
pub use types::{
    Config, HostSection, PluginConfig, RenameConfig, TargetConfig, TargetTable, ThemeConfig,
};
