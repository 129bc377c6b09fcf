//! CLI for savelink.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use savelink_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_config, run_save, SaveArgs};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "savelink")]
#[command(about = "Save a resource URL the way a browser download link would", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Save the resource behind a data:, file: or http(s): URL.
    Save {
        /// Resource locator.
        locator: String,

        /// Suggested filename (default: derived from the locator).
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Download directory (overrides config; default: current directory).
        #[arg(long, short = 'd', value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Replace an existing file instead of picking a numbered name.
        #[arg(long)]
        overwrite: bool,
    },

    /// Compute SHA-256 of a file (e.g. after a save).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// Show the config file path and effective configuration.
    Config,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Save {
                locator,
                name,
                dir,
                overwrite,
            } => {
                let dir = match dir.or_else(|| cfg.download_dir.clone()) {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                let args = SaveArgs {
                    locator: &locator,
                    name: name.as_deref(),
                    dir: &dir,
                    overwrite,
                };
                run_save(&cfg, &args)?;
            }
            CliCommand::Checksum { path } => run_checksum(&path)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}
