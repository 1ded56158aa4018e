//! Hook installation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use crate::git::GitRepository;

const PRE_COMMIT_HOOK: &str = include_str!("../templates/pre-commit.sh");

/// Install command options.
#[derive(Parser)]
pub struct InstallCommand {
    /// Overwrites an existing pre-commit hook.
    #[arg(long)]
    pub force: bool,
}

impl InstallCommand {
    /// Executes the install command.
    pub fn execute(self) -> Result<()> {
        let repo = GitRepository::open()?;
        let hooks_dir = repo.hooks_dir()?;
        let hook = install_hook(&hooks_dir, self.force)?;
        println!("✅ Installed {}", hook.display());
        Ok(())
    }
}

/// Writes the pre-commit hook into `hooks_dir` and returns its path.
///
/// An existing hook is only replaced when `force` is set or when it was
/// written by a previous install.
pub fn install_hook(hooks_dir: &Path, force: bool) -> Result<PathBuf> {
    let hook_path = hooks_dir.join("pre-commit");

    if hook_path.exists() && !force {
        let existing = fs::read_to_string(&hook_path).unwrap_or_default();
        if existing != PRE_COMMIT_HOOK {
            bail!(
                "A pre-commit hook already exists at {}. Use --force to replace it",
                hook_path.display()
            );
        }
    }

    fs::create_dir_all(hooks_dir)
        .with_context(|| format!("Failed to create {}", hooks_dir.display()))?;
    fs::write(&hook_path, PRE_COMMIT_HOOK)
        .with_context(|| format!("Failed to write {}", hook_path.display()))?;
    make_executable(&hook_path)?;

    info!(path = %hook_path.display(), "Installed pre-commit hook");
    Ok(hook_path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions)
        .with_context(|| format!("Failed to make {} executable", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
