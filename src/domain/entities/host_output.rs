//! Host build output
//!
//! What the host build reports about the files it just emitted. The cleanup
//! reconciler uses it to avoid deleting anything the host still produces.
//!
//! The host reports either an in-memory bundle (output-listing strategy) or
//! a persisted manifest (manifest-listing strategy). When neither is
//! available cleanup is skipped for the cycle.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// One item of an emitted bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleItem {
    /// A code chunk and the files it pulls in
    Chunk {
        file_name: String,
        imported_css: Vec<String>,
        imported_assets: Vec<String>,
    },
    /// A standalone emitted asset
    Asset { file_name: String },
}

/// Files the host just wrote, as an in-memory listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostBundle {
    pub items: Vec<BundleItem>,
}

impl HostBundle {
    pub fn new(items: Vec<BundleItem>) -> Self {
        Self { items }
    }

    /// Every emitted file, including transitively referenced css/assets.
    pub fn output_files(&self) -> BTreeSet<String> {
        let mut files = BTreeSet::new();
        for item in &self.items {
            match item {
                BundleItem::Chunk {
                    file_name,
                    imported_css,
                    imported_assets,
                } => {
                    files.insert(file_name.clone());
                    files.extend(imported_css.iter().cloned());
                    files.extend(imported_assets.iter().cloned());
                }
                BundleItem::Asset { file_name } => {
                    files.insert(file_name.clone());
                }
            }
        }
        files
    }
}

/// Errors reading a host manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest not found: {0}")]
    NotFound(String),

    #[error("invalid manifest {file}: {message}")]
    Invalid { file: String, message: String },
}

/// One manifest entry: an emitted file plus what it references
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ManifestChunk {
    pub file: String,
    #[serde(default)]
    pub css: Vec<String>,
    #[serde(default)]
    pub assets: Vec<String>,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub dynamic_imports: Vec<String>,
}

/// A persisted host manifest: module key → emitted chunk
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct HostManifest {
    pub chunks: BTreeMap<String, ManifestChunk>,
}

impl HostManifest {
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ManifestError> {
        serde_json::from_str(content).map_err(|e| ManifestError::Invalid {
            file: origin.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Every file the manifest declares as output.
    ///
    /// Import keys that are not manifest keys themselves are listed purely
    /// as dependencies; the key is then the emitted file name (with the
    /// leading `_` of shared chunks stripped).
    pub fn output_files(&self) -> BTreeSet<String> {
        let mut files = BTreeSet::new();

        for chunk in self.chunks.values() {
            files.insert(chunk.file.clone());
            files.extend(chunk.css.iter().cloned());
            files.extend(chunk.assets.iter().cloned());

            for key in chunk.imports.iter().chain(&chunk.dynamic_imports) {
                match self.chunks.get(key) {
                    Some(imported) => {
                        files.insert(imported.file.clone());
                        files.extend(imported.css.iter().cloned());
                    }
                    None => {
                        files.insert(key.trim_start_matches('_').to_string());
                    }
                }
            }
        }

        files
    }
}

/// What the host reported for the cycle
#[derive(Debug, Clone, Default)]
pub enum HostOutput {
    Bundle(HostBundle),
    Manifest(HostManifest),
    /// Output unknown (manifest disabled or missing); cleanup must not run
    #[default]
    Unavailable,
}

impl HostOutput {
    /// Emitted file names, or `None` when the output is unknown.
    pub fn output_files(&self) -> Option<BTreeSet<String>> {
        match self {
            HostOutput::Bundle(bundle) => Some(bundle.output_files()),
            HostOutput::Manifest(manifest) => Some(manifest.output_files()),
            HostOutput::Unavailable => None,
        }
    }
}
