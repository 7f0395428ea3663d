//! themesync - glob-driven static asset mirroring for theme builds
//!
//! themesync copies static files selected by glob rules from a source tree
//! into a theme's asset directories, keeps them in sync while a host build
//! tool rebuilds, and removes files that nothing justifies anymore.
//!
//! The engine is driven through [`SyncSession`]: the host (or the bundled
//! `themesync` binary) calls its lifecycle methods and receives every
//! outcome as a [`SyncEvent`] on a [`SyncEventSink`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    CleanupResult, CopyReport, CycleStats, FileChangeKind, HostConfig, HostOverrides,
    SessionOptions, SyncSession, WatchOutcome, WatchUseCase,
};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{
    BundleItem, HostBundle, HostManifest, HostOutput, ResolvedRule, Rule, SyncContext,
};
pub use domain::ports::{EventKind, FileSystem, SyncEvent, SyncEventSink};
pub use domain::services::{resolve_targets, CleanGate, ResolvedTargets};
pub use domain::value_objects::{CopyOptions, OverwritePolicy, Rename, SyncMode};
pub use error::{SyncError, SyncResult};
pub use infrastructure::{
    ConsoleEventSink, JsonEventSink, LocalFs, ManifestReader, RecordingEventSink,
};
