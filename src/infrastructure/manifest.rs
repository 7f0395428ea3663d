//! Host Manifest Reader
//!
//! Locates and parses the manifest a host build writes into the asset
//! directory, for drivers that follow the manifest strategy.

use std::path::{Path, PathBuf};

use crate::domain::entities::{HostManifest, HostOutput, ManifestError};
use crate::domain::ports::{FileSystem, SyncEvent, SyncEventSink};
use crate::infrastructure::fs::LocalFs;

/// Candidate manifest locations, relative to the asset directory
pub const MANIFEST_LOCATIONS: &[&str] = &[".vite/manifest.json", "manifest.json"];

/// Reads host manifests through the file-system port
pub struct ManifestReader {
    fs: LocalFs,
}

impl Default for ManifestReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }

    /// First existing manifest under `asset_dir`.
    pub fn locate(&self, asset_dir: &Path) -> Option<PathBuf> {
        MANIFEST_LOCATIONS
            .iter()
            .map(|rel| asset_dir.join(rel))
            .find(|path| self.fs.exists(path))
    }

    pub fn read(&self, asset_dir: &Path) -> Result<HostManifest, ManifestError> {
        let path = self
            .locate(asset_dir)
            .ok_or_else(|| ManifestError::NotFound(asset_dir.display().to_string()))?;

        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|e| ManifestError::Invalid {
                file: path.display().to_string(),
                message: e.to_string(),
            })?;
        HostManifest::parse(&content, &path)
    }

    /// The cycle's host output.
    ///
    /// A missing manifest yields `Unavailable` (cleanup then warns and
    /// skips). A broken one is also reported.
    pub fn host_output(&self, asset_dir: &Path, sink: &dyn SyncEventSink) -> HostOutput {
        match self.read(asset_dir) {
            Ok(manifest) => HostOutput::Manifest(manifest),
            Err(ManifestError::NotFound(_)) => HostOutput::Unavailable,
            Err(e) => {
                sink.on_event(SyncEvent::warning(e.to_string()));
                HostOutput::Unavailable
            }
        }
    }
}
