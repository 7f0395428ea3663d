//! Application Layer
//!
//! Use cases that orchestrate the sync flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Components
//!
//! - `AssetMapBuilder` - Expand rules into the asset map
//! - `CopyEngine` - Materialize entries on disk
//! - `CleanupReconciler` - Delete files nothing justifies anymore
//! - `WatchHandler` / `WatchUseCase` - Incremental updates in long-lived modes
//! - `SyncSession` - Lifecycle owner tying the above together

pub mod asset_map_builder;
pub mod cleanup;
pub mod copy;
pub mod session;
pub mod watch;

pub use asset_map_builder::AssetMapBuilder;
pub use cleanup::{CleanupReconciler, CleanupResult};
pub use copy::{CopyEngine, CopyOutcome, CopyReport};
pub use session::{CycleStats, HostConfig, HostOverrides, SessionOptions, SyncSession};
pub use watch::{
    FileChangeKind, WatchHandler, WatchOutcome, WatchUseCase, WatcherState, DEBOUNCE_MS,
};
