//! Read-only filesystem access for configuration discovery.
//!
//! Keeps config loading testable without touching disk; the mapper itself
//! never performs I/O.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading configuration files.
///
/// Relative paths are resolved against the implementation's root.
pub trait ConfigFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Check whether a regular file exists.
    fn file_exists(&self, path: &Path) -> bool;
}
