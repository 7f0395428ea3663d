use std::path::PathBuf;

use clap::{Parser, Subcommand};

use themesync::config::DEFAULT_CONFIG_FILE;

/// themesync - mirror static theme assets from glob rules
#[derive(Parser, Debug)]
#[command(name = "themesync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Emit NDJSON event records on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Only report warnings, errors and cycle summaries
    #[arg(long, global = true)]
    pub silent: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one sync cycle: copy, then clean stale assets
    Build,

    /// Run a cycle, then keep destinations in sync until Ctrl+C
    Watch {
        /// Run as the dev-server mode (honours `on_serve`)
        #[arg(long)]
        serve: bool,
    },

    /// Print the resolved rules and configuration warnings
    Resolve,
}
