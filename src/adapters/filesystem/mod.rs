//! Filesystem adapter for the `ConfigFilesystem` port.

mod config_filesystem;

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at a working directory.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Resolve `path` against the root; absolute paths are returned as-is.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
    }
}
