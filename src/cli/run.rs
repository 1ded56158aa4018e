//! Run command: route the staged files and execute their checks.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::config::RouteConfig;
use crate::git::GitRepository;
use crate::runner::Runner;

/// Run command options.
#[derive(Parser)]
pub struct RunCommand {
    /// Prints the routed commands without running them.
    #[arg(long)]
    pub dry_run: bool,

    /// Route table to use instead of the discovered one.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl RunCommand {
    /// Executes the run command.
    pub fn execute(self) -> Result<()> {
        let repo = GitRepository::open()?;
        let root = repo.root()?.to_path_buf();

        let (config, source) = RouteConfig::load(&root, self.config.as_deref())?;
        let router = config.compile().context("Invalid route table")?;
        debug!(source = %source, groups = router.routes().len(), "Route table ready");

        let staged: Vec<String> = repo
            .staged_files()?
            .iter()
            .map(|file| file.path_string())
            .collect();

        if staged.is_empty() {
            println!("No staged files, nothing to check.");
            return Ok(());
        }

        let plan = router.plan(&root, &staged);
        if plan.is_empty() {
            println!(
                "{} staged file(s) matched no route, nothing to check.",
                staged.len()
            );
            return Ok(());
        }

        let summary = Runner::new(root).dry_run(self.dry_run).run(&plan)?;

        if self.dry_run {
            println!("{} command(s) would run.", summary.skipped);
        } else {
            println!("✅ {} check(s) passed.", summary.succeeded);
        }
        Ok(())
    }
}
