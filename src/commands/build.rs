use std::path::Path;

use anyhow::Result;

use themesync::domain::value_objects::SyncMode;

use super::common::{load_config, open_session, run_cycle};

pub fn cmd_build(config_path: &Path, json: bool, silent: bool) -> Result<()> {
    let loaded = load_config(config_path, silent)?;
    let mut session = open_session(&loaded, SyncMode::Build, json)?;

    session.configure_host(&loaded.config.host_config());
    run_cycle(&mut session, &loaded);
    session.shutdown();

    Ok(())
}
