//! Executes routed commands.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::RouterError;
use crate::router::CommandLine;

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands that ran and succeeded.
    pub succeeded: usize,
    /// Commands only printed because of dry-run.
    pub skipped: usize,
}

/// Sequential command runner rooted at the repository working tree.
#[derive(Debug, Clone)]
pub struct Runner {
    root: PathBuf,
    dry_run: bool,
}

impl Runner {
    /// Creates a runner executing commands relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
        }
    }

    /// Prints commands instead of executing them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs each command in order, stopping at the first failure.
    ///
    /// Arguments are passed as an array to the program; no shell is
    /// involved, so paths with spaces or metacharacters arrive intact.
    pub fn run(&self, commands: &[CommandLine]) -> Result<RunSummary, RouterError> {
        let mut summary = RunSummary::default();

        for command in commands {
            if self.dry_run {
                println!("• {command}");
                summary.skipped += 1;
                continue;
            }

            println!("▶ {command}");
            info!(group = %command.group, command = %command, "Running check");

            let status = command
                .to_process(&self.root)
                .status()
                .map_err(|source| RouterError::Spawn {
                    command: command.to_string(),
                    source,
                })?;

            if !status.success() {
                return Err(RouterError::CommandFailed {
                    command: command.to_string(),
                    code: status.code(),
                });
            }

            debug!(group = %command.group, "Check passed");
            summary.succeeded += 1;
        }

        Ok(summary)
    }
}
