//! Watch Use Case implementation

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::session::SyncSession;
use crate::domain::ports::{FileSystem, SyncEvent};
use crate::domain::value_objects::path::is_within;
use crate::error::SyncResult;

use super::event::WatcherState;
use super::handler::WatchOutcome;

/// Watch Use Case
///
/// Feeds debounced file-system notifications into a session until the
/// running flag is cleared. The session's initial cycle must already have
/// run so its watched directories are known.
pub struct WatchUseCase<'s, FS: FileSystem> {
    session: &'s mut SyncSession<FS>,
    poll_interval: Duration,
}

impl<'s, FS: FileSystem> WatchUseCase<'s, FS> {
    pub fn new(session: &'s mut SyncSession<FS>) -> Self {
        Self {
            session,
            poll_interval: Duration::from_millis(50),
        }
    }

    /// Start watching (blocking)
    ///
    /// Returns when `running` is set to false.
    pub fn start(&mut self, running: Arc<AtomicBool>) -> SyncResult<()> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    if matches!(event.kind, EventKind::Access(_)) {
                        return;
                    }
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )?;

        let roots = watch_targets(
            &self.session.watch_roots(),
            &self.session.context().source_root,
        );
        for root in roots {
            if let Err(e) = watcher.watch(&root, RecursiveMode::Recursive) {
                self.session.emit(SyncEvent::warning_at(
                    format!("cannot watch directory: {}", e),
                    &root,
                ));
            }
        }

        let mut state = WatcherState::new();
        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(self.poll_interval) {
                state.add_change(path);
            }

            if state.should_sync() {
                self.apply(state.take_changes());
            }
        }

        // Changes that arrived right before the stop request
        if state.has_pending() {
            self.apply(state.take_changes());
        }

        Ok(())
    }

    /// Feed a settled batch of changed paths to the session.
    pub fn apply(&mut self, paths: Vec<PathBuf>) -> Vec<WatchOutcome> {
        paths
            .into_iter()
            .filter(|path| !path.is_dir())
            .map(|path| {
                let kind = self.session.probe_change(&path);
                self.session.handle_file_change(&path, kind)
            })
            .collect()
    }
}

/// Directories to register with the watcher.
///
/// A root that does not exist yet is replaced by its nearest existing
/// ancestor, climbing no higher than `source_root`, so files created under
/// it later are still reported. Roots under another chosen root are dropped
/// since every watch is recursive.
pub fn watch_targets(roots: &[PathBuf], source_root: &Path) -> Vec<PathBuf> {
    let existing: BTreeSet<PathBuf> = roots
        .iter()
        .filter_map(|root| {
            root.ancestors()
                .take_while(|dir| {
                    *dir == root.as_path() || *dir == source_root || is_within(dir, source_root)
                })
                .find(|dir| dir.is_dir())
                .map(Path::to_path_buf)
        })
        .collect();

    let mut targets: Vec<PathBuf> = Vec::new();
    for dir in existing {
        if !targets.iter().any(|target| is_within(&dir, target)) {
            targets.push(dir);
        }
    }
    targets
}
