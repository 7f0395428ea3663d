//! Copy Engine implementation

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::domain::entities::{AssetEntry, AssetMap};
use crate::domain::ports::{FileSystem, SyncEvent, SyncEventSink};
use crate::domain::value_objects::OverwritePolicy;

use super::outcome::{CopyOutcome, CopyReport};

/// Copies asset map entries to their destinations
pub struct CopyEngine<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    sink: &'a dyn SyncEventSink,
}

impl<'a, FS: FileSystem + ?Sized> CopyEngine<'a, FS> {
    pub fn new(fs: &'a FS, sink: &'a dyn SyncEventSink) -> Self {
        Self { fs, sink }
    }

    /// Make sure a destination root exists.
    ///
    /// A missing root is created with a warning. Returns false only when it
    /// could not be created (already reported).
    pub fn ensure_root(&self, dir: &Path) -> bool {
        if self.fs.exists(dir) {
            return true;
        }

        match self.fs.create_dir_all(dir) {
            Ok(()) => {
                self.sink.on_event(SyncEvent::warning_at(
                    "destination directory did not exist and was created",
                    dir,
                ));
                true
            }
            Err(e) => {
                self.sink.on_event(SyncEvent::error(
                    "failed to create destination directory",
                    dir,
                    e.to_string(),
                ));
                false
            }
        }
    }

    /// Copy one source file to its mapped destination.
    pub fn copy_entry(&self, source: &Path, entry: &AssetEntry) -> CopyOutcome {
        let dest = entry.dest.clone();

        if let Some(parent) = dest.parent() {
            if !self.ensure_root(parent) {
                return CopyOutcome::Failed(dest);
            }
        }

        let existed = self.fs.exists(&dest);
        if existed {
            match entry.rule.copy.overwrite {
                OverwritePolicy::Overwrite => {}
                OverwritePolicy::Skip => return CopyOutcome::Skipped(dest),
                OverwritePolicy::Error => {
                    self.sink.on_event(SyncEvent::Error {
                        message: "destination already exists".to_string(),
                        path: dest.clone(),
                        cause: None,
                    });
                    return CopyOutcome::Failed(dest);
                }
            }
        }

        match self.fs.copy(source, &dest, &entry.rule.copy) {
            Ok(()) if existed => {
                self.sink.on_event(SyncEvent::Updated {
                    path: dest.clone(),
                    source: source.to_path_buf(),
                });
                CopyOutcome::Updated(dest)
            }
            Ok(()) => {
                self.sink.on_event(SyncEvent::Created {
                    path: dest.clone(),
                    source: source.to_path_buf(),
                });
                CopyOutcome::Created(dest)
            }
            Err(e) => {
                self.sink
                    .on_event(SyncEvent::error("copy failed", &dest, e.to_string()));
                CopyOutcome::Failed(dest)
            }
        }
    }

    /// Copy every entry of `map` as one parallel batch.
    ///
    /// Destination roots are ensured up front so a missing root is reported
    /// once. The batch joins before returning.
    pub fn copy_all(&self, map: &AssetMap) -> CopyReport {
        let entries: Vec<(&Path, &AssetEntry)> = map.iter().collect();

        let roots: BTreeSet<PathBuf> = entries
            .iter()
            .filter_map(|(_, entry)| entry.dest.parent().map(Path::to_path_buf))
            .collect();
        for root in &roots {
            self.ensure_root(root);
        }

        entries
            .par_iter()
            .map(|(source, entry)| self.copy_entry(source, entry))
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    }
}
