//! Recording Event Sink
//!
//! Keeps every event in memory. Used by tests and by library callers that
//! want to inspect a cycle after the fact.

use std::sync::Mutex;

use crate::domain::ports::{EventKind, SyncEvent, SyncEventSink};

#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<SyncEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<SyncEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events of one kind, in arrival order
    pub fn of_kind(&self, kind: EventKind) -> Vec<SyncEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.kind() == kind)
            .collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.of_kind(kind).len()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl SyncEventSink for RecordingEventSink {
    fn on_event(&self, event: SyncEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
