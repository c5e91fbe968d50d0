//! `ConfigFilesystem` implementation for `LocalFilesystem`.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ConfigFilesystem;

use super::LocalFilesystem;

impl ConfigFilesystem for LocalFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(self.resolve_path(path)).map_err(AppError::from)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.resolve_path(path).is_file()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn test_store() -> (TempDir, LocalFilesystem) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let store = LocalFilesystem::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn reads_relative_paths_from_root() {
        let (dir, store) = test_store();
        fs::write(dir.path().join("codepath.toml"), "[output]\nprefix = \"x\"\n").unwrap();

        assert!(store.file_exists(Path::new("codepath.toml")));
        let content = store.read_file(Path::new("codepath.toml")).unwrap();
        assert!(content.contains("prefix"));
    }

    #[test]
    fn absolute_paths_bypass_root() {
        let (dir, _) = test_store();
        let other = LocalFilesystem::new(PathBuf::from("/nonexistent-root"));
        let file = dir.path().join("abs.yml");
        fs::write(&file, "output: {}\n").unwrap();

        assert!(other.file_exists(&file));
        assert_eq!(other.resolve_path(&file), file);
    }

    #[test]
    fn directories_are_not_config_files() {
        let (dir, store) = test_store();
        fs::create_dir(dir.path().join("codepath.toml")).unwrap();
        assert!(!store.file_exists(Path::new("codepath.toml")));
    }

    #[test]
    fn missing_file_is_io_not_found() {
        let (_dir, store) = test_store();
        let err = store.read_file(Path::new("missing.toml")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
