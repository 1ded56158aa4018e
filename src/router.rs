//! Change-set routing: staged paths in, downstream command lines out.

use std::path::{Path, PathBuf};

use globset::GlobMatcher;
use tracing::debug;

use crate::error::RouterError;

pub mod bundle;
pub mod command;
pub mod rule;

pub use bundle::{ArgumentBundle, BundleEntry};
pub use command::CommandLine;
pub use rule::{PathPredicate, Rule};

/// A compiled file group: which staged files it owns and where they go.
#[derive(Debug, Clone)]
pub struct Route {
    /// Group name.
    pub name: String,
    /// Glob selecting the group's files, relative to the repository root.
    pub glob: GlobMatcher,
    /// Directory the downstream command runs in, relative to the root.
    pub workdir: PathBuf,
    /// Program to run.
    pub program: String,
    /// Target passed as the first argument.
    pub target: String,
    /// When false the command is fixed and the paths are not forwarded.
    pub forward_paths: bool,
    /// Argument rules, in output order.
    pub rules: Vec<Rule>,
}

impl Route {
    /// Returns true if `path` belongs to this group.
    ///
    /// Paths under `root` are matched by their root-relative form; anything
    /// else is matched as given.
    pub fn owns(&self, root: &Path, path: &str) -> bool {
        let path = Path::new(path);
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.glob.is_match(relative)
    }

    /// Computes the command lines for this group's paths.
    ///
    /// A forwarding group produces one command carrying the argument bundle,
    /// or nothing when no rule matched. A fixed group produces its bare
    /// command whenever it has at least one path.
    pub fn route<S: AsRef<str>>(&self, paths: &[S]) -> Vec<CommandLine> {
        if !self.forward_paths {
            if paths.is_empty() {
                return Vec::new();
            }
            let args = vec![self.target.clone()];
            return vec![CommandLine::new(
                &self.name,
                &self.workdir,
                &self.program,
                args.clone(),
                &args,
            )];
        }

        let bundle = ArgumentBundle::build(&self.rules, paths);
        if bundle.is_empty() {
            debug!(group = %self.name, "No rule matched, suppressing command");
            return Vec::new();
        }

        let mut args = vec![self.target.clone()];
        args.extend(bundle.to_args());

        let mut display_args = vec![self.target.clone()];
        display_args.extend(bundle.entries().iter().map(BundleEntry::to_display));

        vec![CommandLine::new(
            &self.name,
            &self.workdir,
            &self.program,
            args,
            &display_args,
        )]
    }
}

/// Paths assigned to one group.
#[derive(Debug, Clone)]
pub struct GroupPaths<'a> {
    /// The owning route.
    pub route: &'a Route,
    /// The group's paths, in staged order.
    pub paths: Vec<String>,
}

/// The full route table.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Creates a router over the given routes, kept in order.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Returns the routes in order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Looks up a route by group name.
    pub fn get(&self, name: &str) -> Result<&Route, RouterError> {
        self.routes
            .iter()
            .find(|route| route.name == name)
            .ok_or_else(|| RouterError::UnknownGroup(name.to_string()))
    }

    /// Splits `paths` into groups. A path may belong to several groups;
    /// groups without paths are left out.
    pub fn partition<S: AsRef<str>>(&self, root: &Path, paths: &[S]) -> Vec<GroupPaths<'_>> {
        self.routes
            .iter()
            .filter_map(|route| {
                let owned: Vec<String> = paths
                    .iter()
                    .map(AsRef::as_ref)
                    .filter(|path| route.owns(root, path))
                    .map(String::from)
                    .collect();

                debug!(group = %route.name, files = owned.len(), "Partitioned staged files");

                if owned.is_empty() {
                    None
                } else {
                    Some(GroupPaths {
                        route,
                        paths: owned,
                    })
                }
            })
            .collect()
    }

    /// Partitions `paths` and routes every group, in route order.
    pub fn plan<S: AsRef<str>>(&self, root: &Path, paths: &[S]) -> Vec<CommandLine> {
        self.partition(root, paths)
            .iter()
            .flat_map(|group| group.route.route(&group.paths))
            .collect()
    }
}
