//! Test double for `ConfigFilesystem`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ConfigFilesystem;

/// In-memory implementation of `ConfigFilesystem` for unit tests.
#[derive(Clone, Debug, Default)]
pub struct MockConfigFs {
    files: HashMap<PathBuf, String>,
}

impl MockConfigFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl ConfigFilesystem for MockConfigFs {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.files.get(path).cloned().ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}
