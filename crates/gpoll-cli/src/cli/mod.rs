//! CLI for the gpoll profile poller.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gpoll_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_once, run_poll};

/// Top-level CLI for gpoll.
#[derive(Debug, Parser)]
#[command(name = "gpoll")]
#[command(
    about = "gpoll: poll the Graph API for your profile, backing off when rate limited",
    long_about = None
)]
pub struct Cli {
    /// Config file to use instead of ~/.config/gpoll/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Defaults to `run`.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Poll the profile until the process is killed.
    Run,

    /// Fetch the profile once, print the result, and exit.
    Once,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command.unwrap_or(CliCommand::Run) {
            CliCommand::Run => run_poll(&cfg).await?,
            CliCommand::Once => run_once(&cfg).await?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
