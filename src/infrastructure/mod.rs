//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system implementation
//! - `events/` - Event sinks (console, JSON, recording)
//! - `manifest` - Host build manifest reader

pub mod events;
pub mod fs;
pub mod manifest;

// Re-export for convenience
pub use events::{ConsoleEventSink, FilteredSink, JsonEventSink, RecordingEventSink};
pub use fs::LocalFs;
pub use manifest::{ManifestReader, MANIFEST_LOCATIONS};
