//! Route table CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::RouteConfig;
use crate::data::to_yaml;
use crate::git::GitRepository;

/// Route table operations.
#[derive(Parser)]
pub struct ConfigCommand {
    /// Configuration subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Shows the effective route table and where it was loaded from.
    Show(ShowCommand),
}

/// Show command options.
#[derive(Parser)]
pub struct ShowCommand {
    /// Route table to show instead of the discovered one.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ConfigCommand {
    /// Executes the config command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            ConfigSubcommands::Show(show_cmd) => show_cmd.execute(),
        }
    }
}

impl ShowCommand {
    /// Executes the show command.
    pub fn execute(self) -> Result<()> {
        let root = match GitRepository::open() {
            Ok(repo) => repo.root()?.to_path_buf(),
            Err(_) => std::env::current_dir().context("Failed to get current directory")?,
        };

        let (config, source) = RouteConfig::load(&root, self.config.as_deref())?;
        config.compile().context("Invalid route table")?;

        println!("# Source: {source}");
        println!("{}", to_yaml(&config)?);
        Ok(())
    }
}
