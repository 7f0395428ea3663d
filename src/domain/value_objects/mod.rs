//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod copy_options;
pub mod path;
mod pattern;
mod rename;
mod sync_mode;

pub use config_warning::ConfigWarning;
pub use copy_options::{CopyOptions, OverwritePolicy};
pub use pattern::{
    is_dynamic_pattern, is_generic_clean_pattern, GlobPattern, PatternSet,
    GENERIC_CLEAN_PATTERNS,
};
pub use rename::{Rename, RenameFn};
pub use sync_mode::SyncMode;
