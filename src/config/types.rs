//! Configuration type definitions

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::application::{HostConfig, SessionOptions};
use crate::domain::entities::{Rule, SyncContext};
use crate::domain::value_objects::path::absolutize;
use crate::domain::value_objects::{OverwritePolicy, Rename, SyncMode};
use crate::error::SyncResult;

use super::loader::{self, ConfigWarning};

/// Theme layout
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    /// Theme root; defaults to the directory holding the config file
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Where relative source globs are anchored; defaults to the theme root
    #[serde(default)]
    pub source_root: Option<PathBuf>,

    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,

    /// The host writes a build manifest
    #[serde(default = "default_true")]
    pub manifest: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            root: None,
            source_root: None,
            asset_dir: default_asset_dir(),
            manifest: true,
        }
    }
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_true() -> bool {
    true
}

/// Per-mode toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PluginConfig {
    #[serde(default = "default_true")]
    pub on_serve: bool,

    #[serde(default = "default_true")]
    pub on_build: bool,

    #[serde(default = "default_true")]
    pub on_watch: bool,

    #[serde(default)]
    pub silent: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            on_serve: true,
            on_build: true,
            on_watch: true,
            silent: false,
        }
    }
}

/// Settings the host build tool would otherwise apply itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostSection {
    #[serde(default)]
    pub empty_out_dir: Option<bool>,

    #[serde(default)]
    pub public_dir: Option<PathBuf>,
}

/// Rename in config form.
///
/// Supports a fixed name:
///   rename = "robots.txt"
///
/// And a template table:
///   rename = { template = "{base}.liquid" }
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RenameConfig {
    Fixed(String),
    Template { template: String },
}

impl RenameConfig {
    pub fn to_rename(&self) -> Rename {
        match self {
            RenameConfig::Fixed(name) => Rename::fixed(name.clone()),
            RenameConfig::Template { template } => Rename::template(template.clone()),
        }
    }
}

/// One `[[targets]]` entry in table form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetTable {
    pub src: String,

    #[serde(default)]
    pub dest: Option<PathBuf>,

    #[serde(default)]
    pub rename: Option<RenameConfig>,

    #[serde(default)]
    pub ignore: Vec<String>,

    #[serde(default)]
    pub clean_match: Option<String>,

    #[serde(default)]
    pub dereference: Option<bool>,

    #[serde(default)]
    pub overwrite: Option<OverwritePolicy>,

    #[serde(default)]
    pub preserve_timestamps: Option<bool>,
}

/// A sync target: a bare source glob or a full table.
///
///   targets = ["images/*.png"]
///
///   [[targets]]
///   src = "icons/*.svg"
///   dest = "snippets"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetConfig {
    Glob(String),
    Table(TargetTable),
}

// Hand-written rather than `#[serde(untagged)]`: an untagged enum buffers
// the table, which hides unknown keys from the warning collector.
impl<'de> Deserialize<'de> for TargetConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TargetVisitor;

        impl<'de> Visitor<'de> for TargetVisitor {
            type Value = TargetConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a source glob or a target table")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(TargetConfig::Glob(value.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                TargetTable::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(TargetConfig::Table)
            }
        }

        deserializer.deserialize_any(TargetVisitor)
    }
}

impl TargetConfig {
    pub fn src(&self) -> &str {
        match self {
            TargetConfig::Glob(src) => src,
            TargetConfig::Table(table) => &table.src,
        }
    }

    pub fn to_rule(&self) -> Rule {
        let table = match self {
            TargetConfig::Glob(src) => return Rule::new(src.as_str()),
            TargetConfig::Table(table) => table,
        };

        let mut rule = Rule::new(table.src.as_str()).with_ignore(table.ignore.iter().cloned());
        if let Some(dest) = &table.dest {
            rule = rule.with_dest(dest.clone());
        }
        if let Some(rename) = &table.rename {
            rule = rule.with_rename(rename.to_rename());
        }
        if let Some(pattern) = &table.clean_match {
            rule = rule.with_clean_match(pattern.as_str());
        }
        if let Some(dereference) = table.dereference {
            rule = rule.with_dereference(dereference);
        }
        if let Some(overwrite) = table.overwrite {
            rule = rule.with_overwrite(overwrite);
        }
        if let Some(preserve) = table.preserve_timestamps {
            rule = rule.with_preserve_timestamps(preserve);
        }
        rule
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub plugin: PluginConfig,

    #[serde(default)]
    pub host: HostSection,

    #[serde(default)]
    pub targets: Vec<TargetConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SyncResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (THEMESYNC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Declared rules, in order
    pub fn to_rules(&self) -> Vec<Rule> {
        self.targets.iter().map(TargetConfig::to_rule).collect()
    }

    /// Resolve the roots against the directory holding the config file.
    pub fn context(&self, config_dir: &Path) -> SyncContext {
        let theme_root = match &self.theme.root {
            Some(root) => absolutize(config_dir, root),
            None => absolutize(config_dir, Path::new(".")),
        };
        let source_root = match &self.theme.source_root {
            Some(source) => absolutize(&theme_root, source),
            None => theme_root.clone(),
        };
        SyncContext::new(source_root, &theme_root, &self.theme.asset_dir)
    }

    pub fn session_options(&self, mode: SyncMode) -> SessionOptions {
        SessionOptions::new(mode)
            .with_on_build(self.plugin.on_build)
            .with_on_watch(self.plugin.on_watch)
            .with_on_serve(self.plugin.on_serve)
            .with_silent(self.plugin.silent)
    }

    pub fn host_config(&self) -> HostConfig {
        HostConfig {
            empty_out_dir: self.host.empty_out_dir,
            public_dir: self.host.public_dir.clone(),
        }
    }
}
