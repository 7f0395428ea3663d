//! Asset Map Builder
//!
//! Expands every resolved rule against the file system and builds a fresh
//! asset map. Rules are processed in declaration order and files within a
//! rule in walk order, so the first claimant of a destination always wins.

use std::sync::Arc;

use crate::domain::entities::{AssetEntry, AssetMap, ResolvedRule};
use crate::domain::ports::{FileSystem, SyncEvent, SyncEventSink};

/// Builds the asset map for one cycle
pub struct AssetMapBuilder<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    sink: &'a dyn SyncEventSink,
    track_dirs: bool,
}

impl<'a, FS: FileSystem + ?Sized> AssetMapBuilder<'a, FS> {
    pub fn new(fs: &'a FS, sink: &'a dyn SyncEventSink) -> Self {
        Self {
            fs,
            sink,
            track_dirs: false,
        }
    }

    /// Record watched directories (long-lived modes)
    pub fn with_watched_dirs(mut self, track: bool) -> Self {
        self.track_dirs = track;
        self
    }

    /// Clear `map` and rebuild it from `rules`.
    pub fn rebuild(&self, map: &mut AssetMap, rules: &[Arc<ResolvedRule>]) {
        map.clear();

        for rule in rules {
            if self.track_dirs {
                // New files in an empty base directory must still be noticed
                map.watch_dir(rule.src.base_dir());
            }

            let sources = match self.fs.expand(&rule.src, &rule.ignore, rule.copy.dereference) {
                Ok(sources) => sources,
                Err(e) => {
                    self.sink.on_event(SyncEvent::error(
                        format!("failed to expand '{}'", rule.label),
                        rule.src.base_dir(),
                        e.to_string(),
                    ));
                    continue;
                }
            };

            for source in sources {
                // An earlier rule already owns this file
                if map.contains(&source) {
                    continue;
                }
                let Some(dest) = rule.destination_for(&source) else {
                    self.sink.on_event(SyncEvent::warning_at(
                        format!(
                            "rename for '{}' leaves the rule destination; file skipped",
                            rule.label
                        ),
                        &source,
                    ));
                    continue;
                };
                let entry = AssetEntry::new(Arc::clone(rule), dest);
                let parent = source.parent().map(|p| p.to_path_buf());

                match map.insert(&source, entry) {
                    Ok(()) => {
                        if self.track_dirs {
                            if let Some(parent) = parent {
                                map.watch_dir(parent);
                            }
                        }
                    }
                    Err(duplicate) => self.sink.on_event(SyncEvent::DuplicateIgnored {
                        path: source,
                        dest: duplicate.dest,
                    }),
                }
            }
        }
    }

    /// Build a new map from `rules`.
    pub fn build(&self, rules: &[Arc<ResolvedRule>]) -> AssetMap {
        let mut map = AssetMap::new();
        self.rebuild(&mut map, rules);
        map
    }
}
