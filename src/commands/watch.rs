use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use themesync::domain::value_objects::SyncMode;
use themesync::WatchUseCase;

use super::common::{load_config, open_session, run_cycle};

pub fn cmd_watch(config_path: &Path, json: bool, silent: bool, serve: bool) -> Result<()> {
    let mode = if serve { SyncMode::Serve } else { SyncMode::Watch };

    let loaded = load_config(config_path, silent)?;
    let mut session = open_session(&loaded, mode, json)?;

    session.configure_host(&loaded.config.host_config());
    run_cycle(&mut session, &loaded);

    if !session.is_enabled() {
        session.shutdown();
        return Ok(());
    }

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("cannot install the Ctrl+C handler")?;

    let watched = WatchUseCase::new(&mut session).start(running);
    session.shutdown();
    watched?;

    Ok(())
}
