//! themesync CLI - glob-driven static asset mirroring
//!
//! Usage: themesync [OPTIONS] <COMMAND>
//!
//! Commands:
//!   build    Run one sync cycle
//!   watch    Sync continuously until Ctrl+C
//!   resolve  Print resolved rules

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build => commands::build::cmd_build(&cli.config, cli.json, cli.silent),
        Commands::Watch { serve } => {
            commands::watch::cmd_watch(&cli.config, cli.json, cli.silent, serve)
        }
        Commands::Resolve => commands::resolve::cmd_resolve(&cli.config, cli.json),
    }
}
