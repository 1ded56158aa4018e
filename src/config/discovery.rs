//! Route table file discovery.

use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the route table.
pub const ROUTES_FILE: &str = "routes.yaml";

/// Environment variable overriding the project config directory.
pub const CONFIG_DIR_ENV: &str = "STAGE_ROUTER_CONFIG_DIR";

/// Returns the XDG-compliant config directory for stage-router.
///
/// Uses `$XDG_CONFIG_HOME/stage-router/` if the variable is set, otherwise
/// `$HOME/.config/stage-router/`. `dirs::config_dir()` is avoided since it
/// points at `~/Library/Application Support/` on macOS.
fn xdg_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_home.is_empty() {
            return Some(PathBuf::from(xdg_home).join("stage-router"));
        }
    }

    dirs::home_dir().map(|home| home.join(".config").join("stage-router"))
}

/// Resolves the project config directory.
///
/// Priority:
/// 1. `STAGE_ROUTER_CONFIG_DIR` environment variable
/// 2. `{root}/.stage-router`
pub fn resolve_config_dir(root: &Path) -> PathBuf {
    if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV) {
        if !env_dir.is_empty() {
            return PathBuf::from(env_dir);
        }
    }

    root.join(".stage-router")
}

/// Identifies where the route table was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given explicitly on the command line.
    Explicit(PathBuf),
    /// Found in `{dir}/local/routes.yaml`.
    LocalOverride(PathBuf),
    /// Found in `{dir}/routes.yaml`.
    Project(PathBuf),
    /// Found in `$XDG_CONFIG_HOME/stage-router/routes.yaml`.
    Xdg(PathBuf),
    /// Found in `$HOME/.stage-router/routes.yaml`.
    Global(PathBuf),
    /// No file anywhere; embedded defaults apply.
    Defaults,
}

impl ConfigSource {
    /// Returns the file backing this source, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p)
            | Self::LocalOverride(p)
            | Self::Project(p)
            | Self::Xdg(p)
            | Self::Global(p) => Some(p),
            Self::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(p) => write!(f, "Explicit: {}", p.display()),
            Self::LocalOverride(p) => write!(f, "Local override: {}", p.display()),
            Self::Project(p) => write!(f, "Project: {}", p.display()),
            Self::Xdg(p) => write!(f, "Global (XDG): {}", p.display()),
            Self::Global(p) => write!(f, "Global: {}", p.display()),
            Self::Defaults => write!(f, "(built-in defaults)"),
        }
    }
}

/// Locates the route table.
///
/// Priority:
/// 1. `{dir}/local/routes.yaml` (local override)
/// 2. `{dir}/routes.yaml` (shared project config)
/// 3. `$XDG_CONFIG_HOME/stage-router/routes.yaml`
/// 4. `$HOME/.stage-router/routes.yaml`
pub fn locate_routes(dir: &Path) -> ConfigSource {
    let local_path = dir.join("local").join(ROUTES_FILE);
    if local_path.exists() {
        return ConfigSource::LocalOverride(local_path);
    }

    let project_path = dir.join(ROUTES_FILE);
    if project_path.exists() {
        return ConfigSource::Project(project_path);
    }

    if let Some(xdg_dir) = xdg_config_dir() {
        let xdg_path = xdg_dir.join(ROUTES_FILE);
        if xdg_path.exists() {
            return ConfigSource::Xdg(xdg_path);
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        let home_path = home_dir.join(".stage-router").join(ROUTES_FILE);
        if home_path.exists() {
            return ConfigSource::Global(home_path);
        }
    }

    ConfigSource::Defaults
}

/// Serializes tests that touch the process environment.
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn local_override_wins() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let base = dir.path();

        std::fs::create_dir_all(base.join("local"))?;
        std::fs::write(base.join("local").join(ROUTES_FILE), "groups: []")?;
        std::fs::write(base.join(ROUTES_FILE), "groups: []")?;

        assert_eq!(
            locate_routes(base),
            ConfigSource::LocalOverride(base.join("local").join(ROUTES_FILE))
        );
        Ok(())
    }

    #[test]
    fn project_fallback() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let base = dir.path();

        std::fs::write(base.join(ROUTES_FILE), "groups: []")?;

        assert_eq!(
            locate_routes(base),
            ConfigSource::Project(base.join(ROUTES_FILE))
        );
        Ok(())
    }

    #[test]
    fn never_reports_missing_local_file() {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        // Depending on the machine a global file may exist; the project
        // tiers must not be reported either way.
        let source = locate_routes(base);
        assert!(!matches!(
            source,
            ConfigSource::LocalOverride(_) | ConfigSource::Project(_)
        ));
    }

    #[test]
    fn config_dir_defaults_under_root() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(CONFIG_DIR_ENV);
        let result = resolve_config_dir(Path::new("/repo"));
        assert_eq!(result, PathBuf::from("/repo/.stage-router"));
    }

    #[test]
    fn config_dir_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, "/tmp/my-routes");
        let result = resolve_config_dir(Path::new("/repo"));
        std::env::remove_var(CONFIG_DIR_ENV);
        assert_eq!(result, PathBuf::from("/tmp/my-routes"));
    }

    #[test]
    fn config_dir_ignores_empty_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, "");
        let result = resolve_config_dir(Path::new("/repo"));
        std::env::remove_var(CONFIG_DIR_ENV);
        assert_eq!(result, PathBuf::from("/repo/.stage-router"));
    }

    #[test]
    fn display_labels() {
        assert_eq!(
            ConfigSource::Project(PathBuf::from(".stage-router/routes.yaml")).to_string(),
            "Project: .stage-router/routes.yaml"
        );
        assert_eq!(ConfigSource::Defaults.to_string(), "(built-in defaults)");
        assert!(ConfigSource::Defaults.path().is_none());
    }
}
