//! Watch
//!
//! Incremental synchronization in long-lived modes:
//! - `WatchHandler` - per-file state machine over the asset map
//! - `WatcherState` - debouncing of raw notifications (100ms)
//! - `WatchUseCase` - `notify` loop feeding a `SyncSession`

mod event;
mod handler;
mod use_case;


pub use event::{FileChangeKind, WatcherState, DEBOUNCE_MS};
pub use handler::{WatchHandler, WatchOutcome};
pub use use_case::{watch_targets, WatchUseCase};
