//! Cleanup Reconciler implementation

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;

use crate::domain::entities::{AssetMap, HostOutput, ResolvedRule};
use crate::domain::ports::{FileSystem, SyncEvent, SyncEventSink};
use crate::domain::services::stale_entries;
use crate::domain::value_objects::path::to_slash;
use crate::domain::value_objects::PatternSet;

use super::result::CleanupResult;

enum Deletion {
    Deleted(PathBuf),
    AlreadyGone,
    Failed(PathBuf),
}

/// Computes and deletes stale destination files
pub struct CleanupReconciler<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    sink: &'a dyn SyncEventSink,
}

impl<'a, FS: FileSystem + ?Sized> CleanupReconciler<'a, FS> {
    pub fn new(fs: &'a FS, sink: &'a dyn SyncEventSink) -> Self {
        Self { fs, sink }
    }

    /// End-of-cycle cleanup.
    ///
    /// Skipped entirely (with a warning) when the host output is unknown.
    pub fn reconcile(
        &self,
        asset_dir: &Path,
        output: &HostOutput,
        map: &AssetMap,
        rules: &[Arc<ResolvedRule>],
    ) -> CleanupResult {
        let Some(outputs) = output.output_files() else {
            self.sink.on_event(SyncEvent::warning(
                "host build output unknown (no bundle or manifest); cleanup skipped",
            ));
            return CleanupResult::skipped("host output unavailable");
        };

        let stale = self.plan(asset_dir, &outputs, map, rules);
        self.delete_all(&stale)
    }

    /// The deletion set for one cycle, deduplicated and sorted.
    pub fn plan(
        &self,
        asset_dir: &Path,
        outputs: &BTreeSet<String>,
        map: &AssetMap,
        rules: &[Arc<ResolvedRule>],
    ) -> Vec<PathBuf> {
        let mut candidates: BTreeSet<PathBuf> = BTreeSet::new();

        if self.fs.exists(asset_dir) {
            match self.fs.list_dir(asset_dir) {
                Ok(listing) => {
                    candidates.extend(stale_entries(
                        &listing,
                        outputs,
                        &map.protected_basenames(),
                    ));
                }
                Err(e) => self.sink.on_event(SyncEvent::warning_at(
                    format!("could not list asset directory: {}", e),
                    asset_dir,
                )),
            }
        }

        for rule in rules {
            candidates.extend(self.clean_match_files(rule));
        }

        candidates
            .into_iter()
            .filter(|path| !is_justified(path, asset_dir, outputs, map))
            .collect()
    }

    /// One-off `clean_match` reconcile before a long-lived mode settles.
    ///
    /// Deletes files matching a rule's `clean_match` that the rule's current
    /// source scan would not produce.
    pub fn reconcile_clean_match(
        &self,
        map: &AssetMap,
        rules: &[Arc<ResolvedRule>],
    ) -> CleanupResult {
        let mut orphans: BTreeSet<PathBuf> = BTreeSet::new();

        for rule in rules.iter().filter(|r| r.clean_match.is_some()) {
            let expected: BTreeSet<PathBuf> =
                match self
                    .fs
                    .expand(&rule.src, &rule.ignore, rule.copy.dereference)
                {
                    Ok(sources) => sources.iter().filter_map(|s| rule.destination_for(s)).collect(),
                    Err(e) => {
                        // Without the expected set every match would look orphaned
                        self.sink.on_event(SyncEvent::warning(format!(
                            "clean_match reconcile skipped for '{}': {}",
                            rule.label, e
                        )));
                        continue;
                    }
                };

            orphans.extend(
                self.clean_match_files(rule)
                    .into_iter()
                    .filter(|path| !expected.contains(path) && !map.is_claimed(path)),
            );
        }

        let orphans: Vec<PathBuf> = orphans.into_iter().collect();
        self.delete_all(&orphans)
    }

    /// Delete `paths` as one parallel batch.
    ///
    /// A file that is already gone counts as clean.
    pub fn delete_all(&self, paths: &[PathBuf]) -> CleanupResult {
        let outcomes: Vec<Deletion> = paths
            .par_iter()
            .map(|path| match self.fs.remove(path) {
                Ok(()) => {
                    self.sink.on_event(SyncEvent::Deleted { path: path.clone() });
                    Deletion::Deleted(path.clone())
                }
                Err(e) if e.is_not_found() => Deletion::AlreadyGone,
                Err(e) => {
                    self.sink
                        .on_event(SyncEvent::error("delete failed", path, e.to_string()));
                    Deletion::Failed(path.clone())
                }
            })
            .collect();

        let mut result = CleanupResult::new();
        for outcome in outcomes {
            match outcome {
                Deletion::Deleted(path) => result.add_deleted(path),
                Deletion::Failed(path) => result.add_error(path),
                Deletion::AlreadyGone => {}
            }
        }
        result
    }

    fn clean_match_files(&self, rule: &ResolvedRule) -> Vec<PathBuf> {
        let Some(pattern) = &rule.clean_match else {
            return Vec::new();
        };

        match self.fs.expand(pattern, &PatternSet::empty(), false) {
            Ok(files) => files,
            Err(e) => {
                self.sink.on_event(SyncEvent::warning(format!(
                    "could not expand clean_match '{}': {}",
                    pattern.as_str(),
                    e
                )));
                Vec::new()
            }
        }
    }
}

/// Owned by the asset map, or declared by the host for the asset directory.
fn is_justified(
    path: &Path,
    asset_dir: &Path,
    outputs: &BTreeSet<String>,
    map: &AssetMap,
) -> bool {
    if map.is_claimed(path) {
        return true;
    }
    path.strip_prefix(asset_dir)
        .map(|rel| outputs.contains(&to_slash(rel)))
        .unwrap_or(false)
}
