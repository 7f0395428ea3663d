//! Watch Event Handler
//!
//! Per-source state machine driven by change notifications:
//!
//! ```text
//! UNTRACKED --create/update--> TRACKED   (copy, record in map)
//! TRACKED   --update---------> TRACKED   (copy again)
//! TRACKED   --delete---------> UNTRACKED (forget, remove destination)
//! ```
//!
//! Everything else is dropped without a transition.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::copy::{CopyEngine, CopyOutcome};
use crate::domain::entities::{AssetEntry, AssetMap, ResolvedRule, RuleMatch};
use crate::domain::ports::{FileSystem, SyncEvent, SyncEventSink};
use crate::domain::value_objects::path::normalize_path;

use super::event::FileChangeKind;

/// What a notification led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchOutcome {
    /// Source (re)materialized
    Copied(CopyOutcome),
    /// Tracked source deleted; `removed` is false if the destination was
    /// already gone
    Removed { dest: PathBuf, removed: bool },
    /// Destination claimed by another source
    Duplicate,
    /// Matched a rule but also its ignore patterns
    Ignored,
    /// Unwatched directory, no matching rule, or untracked delete
    Dropped,
}

pub struct WatchHandler<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    sink: &'a dyn SyncEventSink,
}

impl<'a, FS: FileSystem + ?Sized> WatchHandler<'a, FS> {
    pub fn new(fs: &'a FS, sink: &'a dyn SyncEventSink) -> Self {
        Self { fs, sink }
    }

    /// Classify a raw notification by probing the path.
    pub fn probe(&self, map: &AssetMap, path: &Path) -> FileChangeKind {
        if !self.fs.exists(path) {
            FileChangeKind::Delete
        } else if map.contains(path) {
            FileChangeKind::Update
        } else {
            FileChangeKind::Create
        }
    }

    pub fn handle(
        &self,
        map: &mut AssetMap,
        rules: &[Arc<ResolvedRule>],
        path: &Path,
        kind: FileChangeKind,
    ) -> WatchOutcome {
        let path = normalize_path(path);
        match kind {
            FileChangeKind::Delete => self.untrack(map, &path),
            FileChangeKind::Create | FileChangeKind::Update => self.track(map, rules, &path),
        }
    }

    fn track(
        &self,
        map: &mut AssetMap,
        rules: &[Arc<ResolvedRule>],
        path: &Path,
    ) -> WatchOutcome {
        let Some(dir) = path.parent() else {
            return WatchOutcome::Dropped;
        };
        if !map.is_watched_dir(dir) && !rules.iter().any(|r| r.covers_dir(dir)) {
            return WatchOutcome::Dropped;
        }

        let mut ignored = false;
        let mut matched = None;
        for rule in rules {
            match rule.classify(path) {
                RuleMatch::Included => {
                    matched = Some(rule);
                    break;
                }
                RuleMatch::Ignored => ignored = true,
                RuleMatch::NoMatch => {}
            }
        }

        let Some(rule) = matched else {
            if ignored {
                self.sink.on_event(SyncEvent::Ignored {
                    path: path.to_path_buf(),
                });
                return WatchOutcome::Ignored;
            }
            return WatchOutcome::Dropped;
        };

        let Some(dest) = rule.destination_for(path) else {
            self.sink.on_event(SyncEvent::warning_at(
                format!(
                    "rename for '{}' leaves the rule destination; file skipped",
                    rule.label
                ),
                path,
            ));
            return WatchOutcome::Dropped;
        };
        let entry = AssetEntry::new(Arc::clone(rule), dest);
        if let Err(duplicate) = map.insert(path, entry.clone()) {
            self.sink.on_event(SyncEvent::DuplicateIgnored {
                path: path.to_path_buf(),
                dest: duplicate.dest,
            });
            return WatchOutcome::Duplicate;
        }
        map.watch_dir(dir);

        WatchOutcome::Copied(CopyEngine::new(self.fs, self.sink).copy_entry(path, &entry))
    }

    fn untrack(&self, map: &mut AssetMap, path: &Path) -> WatchOutcome {
        let Some(entry) = map.remove(path) else {
            return WatchOutcome::Dropped;
        };

        let removed = match self.fs.remove(&entry.dest) {
            Ok(()) => {
                self.sink.on_event(SyncEvent::Deleted {
                    path: entry.dest.clone(),
                });
                true
            }
            Err(e) if e.is_not_found() => false,
            Err(e) => {
                self.sink
                    .on_event(SyncEvent::error("delete failed", &entry.dest, e.to_string()));
                false
            }
        };

        WatchOutcome::Removed {
            dest: entry.dest,
            removed,
        }
    }
}
