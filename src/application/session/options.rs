//! Session options and host configuration types

use std::path::PathBuf;

use crate::domain::value_objects::SyncMode;

/// Per-mode enable toggles and output control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub mode: SyncMode,
    pub on_build: bool,
    pub on_watch: bool,
    pub on_serve: bool,
    /// Drop per-file records and error causes
    pub silent: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            mode: SyncMode::Build,
            on_build: true,
            on_watch: true,
            on_serve: true,
            silent: false,
        }
    }
}

impl SessionOptions {
    pub fn new(mode: SyncMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_on_build(mut self, enabled: bool) -> Self {
        self.on_build = enabled;
        self
    }

    pub fn with_on_watch(mut self, enabled: bool) -> Self {
        self.on_watch = enabled;
        self
    }

    pub fn with_on_serve(mut self, enabled: bool) -> Self {
        self.on_serve = enabled;
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Whether the engine runs at all in the selected mode
    pub fn is_enabled(&self) -> bool {
        match self.mode {
            SyncMode::Build => self.on_build,
            SyncMode::Watch => self.on_watch,
            SyncMode::Serve => self.on_serve,
        }
    }
}

/// The host build's own settings the engine cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    /// Host "empty output directory" flag; `None` is the host default
    pub empty_out_dir: Option<bool>,
    /// Host raw-copy directory
    pub public_dir: Option<PathBuf>,
}

/// Settings the engine asks the host to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostOverrides {
    /// Host should copy its public directory itself
    pub copy_public_dir: bool,
    /// Host should empty its output directory itself
    pub empty_out_dir: bool,
}

impl HostOverrides {
    /// The engine takes over copying and cleaning
    pub fn take_over() -> Self {
        Self {
            copy_public_dir: false,
            empty_out_dir: false,
        }
    }

    /// Leave the host as configured (inert session)
    pub fn passthrough(host: &HostConfig) -> Self {
        Self {
            copy_public_dir: true,
            empty_out_dir: host.empty_out_dir.unwrap_or(true),
        }
    }
}

/// Counters for the cycle in progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    pub copied: usize,
    pub skipped: usize,
    pub deleted: usize,
    pub errors: usize,
}
