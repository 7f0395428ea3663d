//! Common test utilities for themesync integration tests.
//!
//! This module provides:
//! - `ThemeFixture`: an isolated theme tree in a temp directory
//! - Session helpers wired to a `RecordingEventSink`
//! - Host output builders

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Arc;

use tempfile::TempDir;

use themesync::{
    BundleItem, HostBundle, HostOutput, LocalFs, RecordingEventSink, Rule, SessionOptions,
    SyncContext, SyncSession,
};

/// Isolated theme tree: sources under `src/`, assets under `assets/`.
pub struct ThemeFixture {
    dir: TempDir,
}

impl ThemeFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write a file, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.path(rel)).unwrap();
    }

    pub fn context(&self) -> SyncContext {
        SyncContext::new(self.path("src"), self.root(), "assets")
    }

    pub fn session(
        &self,
        rules: &[Rule],
        options: SessionOptions,
    ) -> (SyncSession<LocalFs>, Arc<RecordingEventSink>) {
        let sink = Arc::new(RecordingEventSink::new());
        let session =
            SyncSession::new(LocalFs::new(), rules, self.context(), options, sink.clone())
                .unwrap();
        (session, sink)
    }

    /// Run the `themesync` binary with this fixture as working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_themesync"))
            .current_dir(self.root())
            .env_remove("THEMESYNC_SILENT")
            .env_remove("THEMESYNC_ASSET_DIR")
            .args(args)
            .output()
            .unwrap()
    }
}

impl Default for ThemeFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Host output listing plain emitted assets.
pub fn bundle(names: &[&str]) -> HostOutput {
    HostOutput::Bundle(HostBundle::new(
        names
            .iter()
            .map(|name| BundleItem::Asset {
                file_name: name.to_string(),
            })
            .collect(),
    ))
}
