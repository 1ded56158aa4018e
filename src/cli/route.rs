//! Route command: preview the commands for explicit paths.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::RouteConfig;
use crate::data::{OutputFormat, RoutePlan};
use crate::git::GitRepository;
use crate::router::Router;

/// Route command options.
#[derive(Parser)]
pub struct RouteCommand {
    /// Paths to route, in order. Relative paths are resolved against the
    /// current directory, so they route exactly as when staged.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Routes all paths to this group, skipping glob selection.
    #[arg(long)]
    pub group: Option<String>,

    /// Route table to use instead of the discovered one.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

impl RouteCommand {
    /// Executes the route command.
    pub fn execute(self) -> Result<()> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        // Outside a repository, globs match relative to the current directory.
        let root = GitRepository::open()
            .ok()
            .and_then(|repo| repo.root().ok().map(Path::to_path_buf))
            .unwrap_or_else(|| cwd.clone());

        let (config, _) = RouteConfig::load(&root, self.config.as_deref())?;
        let router = config.compile().context("Invalid route table")?;

        let plan = self.plan(&router, &root, &cwd)?;
        let output = plan.render(self.format)?;
        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }

    fn plan(&self, router: &Router, root: &Path, cwd: &Path) -> Result<RoutePlan> {
        let paths = absolute_paths(&self.paths, cwd);
        let commands = match &self.group {
            Some(name) => router.get(name)?.route(&paths),
            None => router.plan(root, &paths),
        };

        Ok(RoutePlan { commands })
    }
}

/// Resolves each path against `cwd`, leaving absolute paths untouched.
fn absolute_paths(paths: &[String], cwd: &Path) -> Vec<String> {
    paths
        .iter()
        .map(|path| cwd.join(path).to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn command(group: Option<&str>, paths: &[&str]) -> RouteCommand {
        RouteCommand {
            paths: paths.iter().map(|p| (*p).to_string()).collect(),
            group: group.map(String::from),
            config: None,
            format: OutputFormat::Text,
        }
    }

    fn router() -> Router {
        RouteConfig::defaults().unwrap().compile().unwrap()
    }

    #[test]
    fn explicit_group_skips_globs() {
        let cmd = command(Some("python"), &["/elsewhere/tool.py"]);
        let plan = cmd.plan(&router(), Path::new("/repo"), Path::new("/repo")).unwrap();
        assert_eq!(plan.commands.len(), 1);
        assert_eq!(
            plan.commands[0].to_string(),
            "cd ./api && make pre-commit args=\"/elsewhere/tool.py\""
        );
    }

    #[test]
    fn glob_selection_by_default() {
        let cmd = command(None, &["/repo/api/openapi.yaml"]);
        let plan = cmd.plan(&router(), Path::new("/repo"), Path::new("/repo")).unwrap();
        assert_eq!(plan.commands.len(), 1);
        assert_eq!(plan.commands[0].group, "openapi");
    }

    #[test]
    fn relative_paths_route_like_staged_paths() {
        let cmd = command(None, &["api/focus_api/x.py"]);
        let plan = cmd.plan(&router(), Path::new("/repo"), Path::new("/repo")).unwrap();
        assert_eq!(plan.commands.len(), 1);
        assert_eq!(plan.commands[0].group, "python");
        assert_eq!(
            plan.commands[0].to_string(),
            "cd ./api && make pre-commit args=\"/repo/api/focus_api/x.py\" \
             flake_args=\"/repo/api/focus_api/x.py\" mypy_args=\"/repo/api/focus_api/x.py\""
        );
    }

    #[test]
    fn relative_paths_resolve_from_subdirectory() {
        let cmd = command(None, &["bin/tool.py"]);
        let plan = cmd
            .plan(&router(), Path::new("/repo"), Path::new("/repo/api"))
            .unwrap();
        assert_eq!(
            plan.commands[0].to_string(),
            "cd ./api && make pre-commit args=\"/repo/api/bin/tool.py\" \
             flake_args=\"/repo/api/bin/tool.py\" mypy_args=\"/repo/api/bin/tool.py\""
        );
    }

    #[test]
    fn unknown_group_fails() {
        let cmd = command(Some("docs"), &["/repo/README.md"]);
        assert!(cmd.plan(&router(), Path::new("/repo"), Path::new("/repo")).is_err());
    }
}
