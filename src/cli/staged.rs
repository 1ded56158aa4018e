//! Staged command: list the files staged for the next commit.

use anyhow::{Context, Result};
use clap::Parser;

use crate::data::{to_yaml, OutputFormat};
use crate::git::GitRepository;

/// Staged command options.
#[derive(Parser)]
pub struct StagedCommand {
    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

impl StagedCommand {
    /// Executes the staged command.
    pub fn execute(self) -> Result<()> {
        let repo = GitRepository::open()?;
        let staged = repo.staged_files()?;

        match self.format {
            OutputFormat::Text => {
                for file in &staged {
                    println!("{} {}", file.status, file.path.display());
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&staged)
                    .context("Failed to serialize staged files to JSON")?;
                println!("{json}");
            }
            OutputFormat::Yaml => println!("{}", to_yaml(&staged)?),
        }
        Ok(())
    }
}
