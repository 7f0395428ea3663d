//! Silent-mode filter
//!
//! Wraps another sink. When silent, per-file records are dropped and error
//! records lose their underlying cause; warnings and lifecycle events pass.

use std::sync::Arc;

use crate::domain::ports::{SyncEvent, SyncEventSink};

pub struct FilteredSink {
    inner: Arc<dyn SyncEventSink>,
    silent: bool,
}

impl FilteredSink {
    pub fn new(inner: Arc<dyn SyncEventSink>, silent: bool) -> Self {
        Self { inner, silent }
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

impl SyncEventSink for FilteredSink {
    fn on_event(&self, event: SyncEvent) {
        if !self.silent {
            self.inner.on_event(event);
            return;
        }

        match event {
            e if e.kind().is_per_file() => {}
            SyncEvent::Error { message, path, .. } => self.inner.on_event(SyncEvent::Error {
                message,
                path,
                cause: None,
            }),
            other => self.inner.on_event(other),
        }
    }

    fn flush(&self) {
        self.inner.flush()
    }
}
