//! JSON Event Sink
//!
//! Outputs sync events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{SyncEvent, SyncEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
        }
    }
}

/// Render one event as a JSON object.
pub fn event_to_json(event: &SyncEvent) -> serde_json::Value {
    let kind = event.kind().as_str();
    match event {
        SyncEvent::CycleStarted { mode, entries } => serde_json::json!({
            "event": kind,
            "mode": mode.to_string(),
            "entries": entries,
        }),

        SyncEvent::Created { path, source } | SyncEvent::Updated { path, source } => {
            serde_json::json!({
                "event": kind,
                "path": path.display().to_string(),
                "related_path": source.display().to_string(),
            })
        }

        SyncEvent::Deleted { path } | SyncEvent::Ignored { path } => serde_json::json!({
            "event": kind,
            "path": path.display().to_string(),
        }),

        SyncEvent::DuplicateIgnored { path, dest } => serde_json::json!({
            "event": kind,
            "path": path.display().to_string(),
            "related_path": dest.display().to_string(),
        }),

        SyncEvent::Warning { message, path } => {
            let mut json = serde_json::json!({
                "event": kind,
                "message": message,
            });
            if let Some(path) = path {
                json["path"] = serde_json::Value::String(path.display().to_string());
            }
            json
        }

        SyncEvent::Error {
            message,
            path,
            cause,
        } => {
            let mut json = serde_json::json!({
                "event": kind,
                "message": message,
                "path": path.display().to_string(),
            });
            if let Some(cause) = cause {
                json["cause"] = serde_json::Value::String(cause.clone());
            }
            json
        }

        SyncEvent::CycleFinished {
            copied,
            skipped,
            deleted,
            errors,
        } => {
            let status = if *errors == 0 { "success" } else { "partial" };
            serde_json::json!({
                "event": kind,
                "status": status,
                "copied": copied,
                "skipped": skipped,
                "deleted": deleted,
                "errors": errors,
            })
        }

        SyncEvent::Shutdown => serde_json::json!({ "event": kind }),
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        self.write_event(event_to_json(&event));
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
