//! Sync session
//!
//! Owns everything that lives for one configuration load: resolved rules,
//! the asset map, the cleanup gate and the host output of the current
//! cycle. The host drives it through lifecycle methods; the watch loop
//! feeds it file changes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::asset_map_builder::AssetMapBuilder;
use crate::application::cleanup::{CleanupReconciler, CleanupResult};
use crate::application::copy::{CopyEngine, CopyOutcome, CopyReport};
use crate::application::watch::{FileChangeKind, WatchHandler, WatchOutcome};
use crate::domain::entities::{AssetMap, HostOutput, ResolvedRule, Rule, SyncContext};
use crate::domain::ports::{FileSystem, SyncEvent, SyncEventSink};
use crate::domain::services::{resolve_targets, CleanGate};
use crate::domain::value_objects::path::is_within;
use crate::domain::value_objects::SyncMode;
use crate::error::SyncResult;
use crate::infrastructure::events::FilteredSink;

use super::options::{CycleStats, HostConfig, HostOverrides, SessionOptions};

/// One synchronization session
pub struct SyncSession<FS: FileSystem> {
    fs: FS,
    sink: FilteredSink,
    options: SessionOptions,
    context: SyncContext,
    rules: Vec<Arc<ResolvedRule>>,
    map: AssetMap,
    gate: CleanGate,
    host_output: HostOutput,
    stats: CycleStats,
    clean_match_reconciled: bool,
}

impl<FS: FileSystem> SyncSession<FS> {
    /// Resolve `rules` and set up a session.
    ///
    /// Fails only on configuration errors. An inert session (mode disabled)
    /// still validates its rules but emits nothing.
    pub fn new(
        fs: FS,
        rules: &[Rule],
        context: SyncContext,
        options: SessionOptions,
        sink: Arc<dyn SyncEventSink>,
    ) -> SyncResult<Self> {
        let resolved = resolve_targets(rules, &context)?;
        let sink = FilteredSink::new(sink, options.silent);

        if options.is_enabled() {
            for warning in resolved.warnings {
                sink.on_event(warning);
            }
        }

        let gate = CleanGate::evaluate(None, &context);
        Ok(Self {
            fs,
            sink,
            options,
            context,
            rules: resolved.rules,
            map: AssetMap::new(),
            gate,
            host_output: HostOutput::Unavailable,
            stats: CycleStats::default(),
            clean_match_reconciled: false,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.options.is_enabled()
    }

    pub fn mode(&self) -> SyncMode {
        self.options.mode
    }

    pub fn context(&self) -> &SyncContext {
        &self.context
    }

    pub fn rules(&self) -> &[Arc<ResolvedRule>] {
        &self.rules
    }

    pub fn asset_map(&self) -> &AssetMap {
        &self.map
    }

    pub fn clean_gate(&self) -> CleanGate {
        self.gate
    }

    pub fn stats(&self) -> CycleStats {
        self.stats
    }

    /// Host configuration is known: decide the cleanup gate and take over
    /// the host's raw copy and output cleaning.
    pub fn configure_host(&mut self, host: &HostConfig) -> HostOverrides {
        self.gate = CleanGate::evaluate(host.empty_out_dir, &self.context);

        if !self.is_enabled() {
            return HostOverrides::passthrough(host);
        }

        if let Some(public_dir) = &host.public_dir {
            self.sink.on_event(SyncEvent::warning_at(
                "host public_dir copying is disabled; assets are synced by themesync",
                public_dir,
            ));
        }
        if host.empty_out_dir.is_some() {
            self.sink.on_event(SyncEvent::warning(
                "host empty_out_dir is overridden; stale assets are cleaned by themesync",
            ));
        }
        match self.gate {
            CleanGate::Enabled => {}
            CleanGate::DisabledByHost => self.sink.on_event(SyncEvent::warning(
                "cleanup disabled: host empty_out_dir is false",
            )),
            CleanGate::OutsideThemeRoot => self.sink.on_event(SyncEvent::warning_at(
                "cleanup disabled: asset directory is not inside the theme root",
                &self.context.asset_dir,
            )),
        }

        HostOverrides::take_over()
    }

    /// A cycle starts: rebuild the asset map and copy everything in it.
    ///
    /// In long-lived modes the first cycle also purges `clean_match` files
    /// whose sources are gone, unless cleanup is disabled.
    pub fn start_cycle(&mut self) -> CopyReport {
        if !self.is_enabled() {
            return CopyReport::default();
        }

        self.stats = CycleStats::default();
        self.host_output = HostOutput::Unavailable;

        let long_lived = self.options.mode.is_long_lived();
        AssetMapBuilder::new(&self.fs, &self.sink)
            .with_watched_dirs(long_lived)
            .rebuild(&mut self.map, &self.rules);

        self.sink.on_event(SyncEvent::CycleStarted {
            mode: self.options.mode,
            entries: self.map.len(),
        });

        let report = CopyEngine::new(&self.fs, &self.sink).copy_all(&self.map);
        self.stats.copied += report.copied.len();
        self.stats.skipped += report.skipped.len();
        self.stats.errors += report.failed.len();

        if long_lived && !self.clean_match_reconciled {
            self.clean_match_reconciled = true;
            if self.gate.is_enabled() {
                let result = CleanupReconciler::new(&self.fs, &self.sink)
                    .reconcile_clean_match(&self.map, &self.rules);
                self.record_cleanup(&result);
            }
        }

        report
    }

    /// The host wrote its output for this cycle.
    pub fn record_output(&mut self, output: HostOutput) {
        if self.is_enabled() {
            self.host_output = output;
        }
    }

    /// The cycle finished: delete stale files and report the cycle.
    pub fn finish_cycle(&mut self) -> CleanupResult {
        if !self.is_enabled() {
            return CleanupResult::default();
        }

        let result = if self.gate.is_enabled() {
            CleanupReconciler::new(&self.fs, &self.sink).reconcile(
                &self.context.asset_dir,
                &self.host_output,
                &self.map,
                &self.rules,
            )
        } else {
            CleanupResult::skipped("cleanup disabled")
        };
        self.record_cleanup(&result);

        self.sink.on_event(SyncEvent::CycleFinished {
            copied: self.stats.copied,
            skipped: self.stats.skipped,
            deleted: self.stats.deleted,
            errors: self.stats.errors,
        });

        result
    }

    /// Classify a raw notification for `path`.
    pub fn probe_change(&self, path: &Path) -> FileChangeKind {
        WatchHandler::new(&self.fs, &self.sink).probe(&self.map, path)
    }

    /// A source file changed (long-lived modes only).
    pub fn handle_file_change(&mut self, path: &Path, kind: FileChangeKind) -> WatchOutcome {
        if !self.is_enabled() || !self.options.mode.is_long_lived() {
            return WatchOutcome::Dropped;
        }

        let outcome =
            WatchHandler::new(&self.fs, &self.sink).handle(&mut self.map, &self.rules, path, kind);

        match &outcome {
            WatchOutcome::Copied(CopyOutcome::Created(_) | CopyOutcome::Updated(_)) => {
                self.stats.copied += 1
            }
            WatchOutcome::Copied(CopyOutcome::Skipped(_)) => self.stats.skipped += 1,
            WatchOutcome::Copied(CopyOutcome::Failed(_)) => self.stats.errors += 1,
            WatchOutcome::Removed { removed: true, .. } => self.stats.deleted += 1,
            _ => {}
        }

        outcome
    }

    /// Directories a watcher must observe: the watched set minus anything
    /// already covered by a recursive watch on an ancestor.
    pub fn watch_roots(&self) -> Vec<PathBuf> {
        let mut roots: Vec<PathBuf> = Vec::new();
        for dir in self.map.watched_dirs() {
            if roots.iter().any(|root| is_within(dir, root)) {
                continue;
            }
            roots.push(dir.clone());
        }
        roots
    }

    /// The session's (possibly silenced) sink
    pub fn sink(&self) -> &dyn SyncEventSink {
        &self.sink
    }

    /// Report an event through the session's sink.
    pub fn emit(&self, event: SyncEvent) {
        self.sink.on_event(event);
    }

    /// Final flush.
    pub fn shutdown(&mut self) {
        if self.is_enabled() {
            self.sink.on_event(SyncEvent::Shutdown);
        }
        self.sink.flush();
    }

    fn record_cleanup(&mut self, result: &CleanupResult) {
        self.stats.deleted += result.deleted.len();
        self.stats.errors += result.failed.len();
    }
}
