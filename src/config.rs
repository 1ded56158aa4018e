//! Route table configuration.
//!
//! The route table is a YAML list of file groups. Each group selects staged
//! files with a glob and sends them to a `make` target in a sub-directory,
//! either forwarding the paths through named argument rules or running a
//! fixed command.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::GlobBuilder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RouterError;
use crate::router::{Route, Router, Rule};

pub mod discovery;

pub use discovery::{locate_routes, resolve_config_dir, ConfigSource, ROUTES_FILE};

/// Built-in route table.
pub const DEFAULT_ROUTES_YAML: &str = include_str!("config/defaults.yaml");

/// The full route table as written on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// File groups, routed in this order.
    pub groups: Vec<GroupConfig>,
}

/// One file group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Unique group name.
    pub name: String,
    /// Glob over root-relative paths, e.g. `api/**/*.py`.
    pub glob: String,
    /// Directory the command runs in, relative to the repository root.
    #[serde(default = "default_workdir")]
    pub workdir: PathBuf,
    /// Program to run.
    #[serde(default = "default_program")]
    pub program: String,
    /// Make target.
    pub target: String,
    /// Forward matched paths as named arguments.
    #[serde(default = "default_true")]
    pub forward_paths: bool,
    /// Argument rules, ignored when paths are not forwarded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleConfig>,
}

/// One argument rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Argument name.
    pub name: String,
    /// Regular expression searched in each path; absent means every path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Whether the rule contributes an argument.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_workdir() -> PathBuf {
    PathBuf::from(".")
}

fn default_program() -> String {
    "make".to_string()
}

const fn default_true() -> bool {
    true
}

impl RouteConfig {
    /// Returns the built-in route table.
    pub fn defaults() -> Result<Self> {
        Self::from_yaml(DEFAULT_ROUTES_YAML).context("Built-in route table is invalid")
    }

    /// Parses a route table from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse route table")
    }

    /// Reads a route table from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read route table: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid route table: {}", path.display()))
    }

    /// Loads the effective route table for a repository rooted at `root`.
    ///
    /// An explicit path wins; otherwise the discovery chain is searched and
    /// the built-in table is used when nothing is found.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let source = match explicit {
            Some(path) => ConfigSource::Explicit(path.to_path_buf()),
            None => locate_routes(&resolve_config_dir(root)),
        };

        debug!(source = %source, "Loading route table");

        let config = match source.path() {
            Some(path) => Self::from_file(path)?,
            None => Self::defaults()?,
        };

        Ok((config, source))
    }

    /// Validates the table and compiles it into a router.
    pub fn compile(&self) -> Result<Router, RouterError> {
        let mut seen = HashSet::new();
        let mut routes = Vec::with_capacity(self.groups.len());

        for group in &self.groups {
            if !seen.insert(group.name.as_str()) {
                return Err(RouterError::DuplicateGroup(group.name.clone()));
            }
            routes.push(group.compile()?);
        }

        Ok(Router::new(routes))
    }
}

impl GroupConfig {
    /// Validates the group and compiles its glob and rules.
    pub fn compile(&self) -> Result<Route, RouterError> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name must not be empty"));
        }
        if self.target.trim().is_empty() {
            return Err(self.invalid("target must not be empty"));
        }
        if self.program.trim().is_empty() {
            return Err(self.invalid("program must not be empty"));
        }

        let glob = GlobBuilder::new(&self.glob)
            .literal_separator(true)
            .build()
            .map_err(|source| RouterError::InvalidGlob {
                group: self.name.clone(),
                glob: self.glob.clone(),
                source,
            })?
            .compile_matcher();

        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            if !seen.insert(rule.name.as_str()) {
                return Err(RouterError::DuplicateRule {
                    group: self.name.clone(),
                    rule: rule.name.clone(),
                });
            }
            rules.push(rule.compile(&self.name)?);
        }

        Ok(Route {
            name: self.name.clone(),
            glob,
            workdir: self.workdir.clone(),
            program: self.program.clone(),
            target: self.target.clone(),
            forward_paths: self.forward_paths,
            rules,
        })
    }

    fn invalid(&self, reason: &str) -> RouterError {
        RouterError::InvalidGroup {
            group: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

impl RuleConfig {
    /// Compiles the rule's predicate.
    pub fn compile(&self, group: &str) -> Result<Rule, RouterError> {
        let rule = match &self.pattern {
            None => Rule::all(&self.name),
            Some(pattern) => {
                Rule::pattern(&self.name, pattern).map_err(|source| RouterError::InvalidPattern {
                    group: group.to_string(),
                    rule: self.name.clone(),
                    source,
                })?
            }
        };

        Ok(rule.with_enabled(self.enabled))
    }
}
