//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod sync_events;

pub use file_system::{FileSystem, FsError, FsResult, ListedEntry};
pub use sync_events::{EventKind, NoopEventSink, SyncEvent, SyncEventSink};
