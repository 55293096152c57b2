//! CLI for the mgrab download-client selector.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use mgrab_core::client::{Category, Protocol};
use mgrab_core::config;
use mgrab_core::registry::ConfigRegistry;

use commands::{run_completions, run_get, run_list, run_pick};

/// Top-level CLI for the mgrab download-client selector.
#[derive(Debug, Parser)]
#[command(name = "mgrab")]
#[command(about = "mgrab: download-client selection for media acquisition", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the configured download clients.
    List {
        /// Emit machine-readable JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show one configured client by its ID.
    Get {
        /// Client identifier.
        id: i64,
    },

    /// Run one or more selections and print which client would win.
    Pick {
        /// Transport protocol of the release: usenet or torrent.
        #[arg(long)]
        protocol: Protocol,

        /// Content category of the release.
        #[arg(long, default_value = "standard")]
        category: Category,

        /// Number of consecutive selections to run (shows the rotation).
        #[arg(long, default_value = "1", value_name = "N")]
        count: usize,

        /// Treat these client IDs as blocked for this run (repeatable).
        #[arg(long = "blocked", value_name = "ID")]
        blocked: Vec<i64>,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config with {} client(s)", cfg.clients.len());
        let registry = ConfigRegistry::from_config(&cfg)?;

        match cli.command {
            CliCommand::List { json } => run_list(&registry, json)?,
            CliCommand::Get { id } => run_get(&registry, id)?,
            CliCommand::Pick {
                protocol,
                category,
                count,
                blocked,
            } => run_pick(registry, protocol, category, count, &blocked)?,
            CliCommand::Completions { .. } => unreachable!("handled above"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
