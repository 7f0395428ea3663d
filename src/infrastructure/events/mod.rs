//! Event Sink Implementations
//!
//! Provides concrete implementations of SyncEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable, timestamped lines
//! - RecordingEventSink: In-memory capture
//! - FilteredSink: Silent-mode wrapper around any of the above

mod console;
mod filtered;
mod json;
mod recording;

pub use console::ConsoleEventSink;
pub use filtered::FilteredSink;
pub use json::{event_to_json, JsonEventSink};
pub use recording::RecordingEventSink;
