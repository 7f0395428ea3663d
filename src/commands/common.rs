use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use themesync::config::{Config, ConfigWarning};
use themesync::domain::ports::{SyncEvent, SyncEventSink};
use themesync::domain::value_objects::SyncMode;
use themesync::{
    ConsoleEventSink, HostOutput, JsonEventSink, LocalFs, ManifestReader, SyncContext,
    SyncSession,
};

/// A loaded config file, with env overrides and CLI flags applied
pub struct LoadedConfig {
    pub config: Config,
    pub config_dir: PathBuf,
    pub warnings: Vec<ConfigWarning>,
}

impl LoadedConfig {
    pub fn context(&self) -> SyncContext {
        self.config.context(&self.config_dir)
    }
}

pub fn load_config(path: &Path, silent: bool) -> Result<LoadedConfig> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("cannot determine the working directory")?
            .join(path)
    };

    let (config, warnings) = Config::load_with_warnings(&path)?;
    let mut config = config.with_env_overrides();
    if silent {
        config.plugin.silent = true;
    }

    let config_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(LoadedConfig {
        config,
        config_dir,
        warnings,
    })
}

pub fn event_sink(json: bool, root: &Path) -> Arc<dyn SyncEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stderr().with_root(root))
    }
}

pub fn config_warning_event(warning: &ConfigWarning) -> SyncEvent {
    SyncEvent::warning_at(warning.to_string(), &warning.file)
}

/// Build a session and report config-file warnings through its sink.
pub fn open_session(
    loaded: &LoadedConfig,
    mode: SyncMode,
    json: bool,
) -> Result<SyncSession<LocalFs>> {
    let context = loaded.context();
    let sink = event_sink(json, &context.theme_root);

    let session = SyncSession::new(
        LocalFs::new(),
        &loaded.config.to_rules(),
        context,
        loaded.config.session_options(mode),
        sink,
    )?;

    if session.is_enabled() {
        for warning in &loaded.warnings {
            session.emit(config_warning_event(warning));
        }
    }
    Ok(session)
}

/// Stand in for the host: copy, read its manifest, clean.
pub fn run_cycle(session: &mut SyncSession<LocalFs>, loaded: &LoadedConfig) {
    session.start_cycle();

    if session.is_enabled() && loaded.config.theme.manifest {
        let asset_dir = session.context().asset_dir.clone();
        let output = ManifestReader::new().host_output(&asset_dir, session.sink());
        session.record_output(output);
    } else {
        session.record_output(HostOutput::Unavailable);
    }

    session.finish_cycle();
}
