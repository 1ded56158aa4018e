//! CLI interface for stage-router.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod config;
pub mod help;
pub mod install;
pub mod route;
pub mod run;
pub mod staged;

/// stage-router: routes staged files to pre-commit checks.
#[derive(Parser)]
#[command(name = "stage-router")]
#[command(about = "Routes staged git files to pre-commit make targets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Routes the staged files and runs their checks.
    Run(run::RunCommand),
    /// Prints the commands routed for the given paths without running them.
    Route(route::RouteCommand),
    /// Lists the files staged for the next commit.
    Staged(staged::StagedCommand),
    /// Route table inspection.
    Config(config::ConfigCommand),
    /// Installs the git pre-commit hook.
    Install(install::InstallCommand),
    /// Displays comprehensive help for all commands.
    #[command(name = "help-all")]
    HelpAll(help::HelpCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Run(run_cmd) => run_cmd.execute(),
            Commands::Route(route_cmd) => route_cmd.execute(),
            Commands::Staged(staged_cmd) => staged_cmd.execute(),
            Commands::Config(config_cmd) => config_cmd.execute(),
            Commands::Install(install_cmd) => install_cmd.execute(),
            Commands::HelpAll(help_cmd) => help_cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_route_with_paths() {
        let cli = Cli::try_parse_from([
            "stage-router",
            "route",
            "--group",
            "python",
            "/repo/api/bin/z.py",
        ]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Route(route::RouteCommand { ref paths, .. })) if paths.len() == 1
        ));
    }

    #[test]
    fn parses_run_dry_run() {
        let cli = Cli::try_parse_from(["stage-router", "run", "--dry-run"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Run(run::RunCommand { dry_run: true, .. }))
        ));
    }
}
