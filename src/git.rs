//! Git repository access and staged-file discovery.

use std::path::PathBuf;

use serde::Serialize;

pub mod repository;

pub use repository::GitRepository;

/// A file staged for the next commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedFile {
    /// Index status: A, C, M, R or T.
    pub status: char,
    /// Absolute path in the working tree.
    pub path: PathBuf,
}

impl StagedFile {
    /// Returns the path as a string.
    pub fn path_string(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}
