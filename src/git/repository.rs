//! Git repository access

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use git2::{Delta, DiffFindOptions, DiffOptions, ErrorCode, Index, Repository, Tree};
use tracing::debug;

use super::StagedFile;

/// Variable git sets for hooks when the commit is built in a temporary index.
pub const INDEX_FILE_ENV: &str = "GIT_INDEX_FILE";

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open repository containing the current directory, honouring
    /// `GIT_DIR` and the other variables git exports to hooks
    pub fn open() -> Result<Self> {
        let repo = Repository::open_from_env().context("Not in a git repository")?;

        Ok(Self { repo })
    }

    /// Open repository at specified path
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path).context("Failed to open git repository")?;

        Ok(Self { repo })
    }

    /// Get the working tree root
    pub fn root(&self) -> Result<&Path> {
        self.repo
            .workdir()
            .context("Repository has no working tree (bare repository)")
    }

    /// Get the hooks directory, honouring `core.hooksPath`
    pub fn hooks_dir(&self) -> Result<PathBuf> {
        let config = self.repo.config().context("Failed to read git config")?;
        match config.get_path("core.hooksPath") {
            Ok(path) if path.is_absolute() => Ok(path),
            Ok(path) => Ok(self.root()?.join(path)),
            Err(_) => Ok(self.repo.path().join("hooks")),
        }
    }

    /// List files staged for the next commit.
    ///
    /// Compares HEAD (or an empty tree on an unborn branch) with the index
    /// and keeps added, copied, modified, renamed and type-changed entries.
    /// Deleted files are skipped since there is nothing left to check.
    ///
    /// During `git commit -a` or `git commit <path>` the hook sees a
    /// temporary index through `GIT_INDEX_FILE`; that index is read instead
    /// of the repository's own.
    pub fn staged_files(&self) -> Result<Vec<StagedFile>> {
        let root = self.root()?;
        let head_tree = self.head_tree()?;
        let index = self.index()?;

        let mut opts = DiffOptions::new();
        opts.include_typechange(true);

        let mut diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), Some(&mut opts))
            .context("Failed to diff HEAD against the index")?;

        let mut find = DiffFindOptions::new();
        find.renames(true).copies(true);
        diff.find_similar(Some(&mut find))
            .context("Failed to detect renames")?;

        let mut staged = Vec::new();
        for delta in diff.deltas() {
            let status = match delta.status() {
                Delta::Added => 'A',
                Delta::Copied => 'C',
                Delta::Modified => 'M',
                Delta::Renamed => 'R',
                Delta::Typechange => 'T',
                _ => continue,
            };

            if let Some(path) = delta.new_file().path() {
                staged.push(StagedFile {
                    status,
                    path: root.join(path),
                });
            }
        }

        debug!(count = staged.len(), "Collected staged files");
        Ok(staged)
    }

    fn index(&self) -> Result<Index> {
        match std::env::var_os(INDEX_FILE_ENV) {
            Some(path) if !path.is_empty() => {
                // Relative paths are relative to the working tree, where
                // git runs its hooks.
                let path = self.root()?.join(PathBuf::from(path));
                debug!(path = %path.display(), "Reading index from GIT_INDEX_FILE");
                Index::open(&path)
                    .with_context(|| format!("Failed to read index: {}", path.display()))
            }
            _ => self.repo.index().context("Failed to read index"),
        }
    }

    fn head_tree(&self) -> Result<Option<Tree<'_>>> {
        match self.repo.head() {
            Ok(head) => {
                let tree = head.peel_to_tree().context("Failed to peel HEAD to tree")?;
                Ok(Some(tree))
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to get HEAD reference"),
        }
    }
}
