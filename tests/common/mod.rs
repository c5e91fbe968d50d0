//! Shared testing utilities for codepath CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used as the CLI's working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path outside the working directory, for configs passed by absolute path.
    pub fn outside_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `codepath` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("codepath").expect("Failed to locate codepath binary");
        cmd.current_dir(&self.work_dir).env_remove("CODEPATH_CONFIG").env_remove("RUST_LOG");
        cmd
    }

    /// Write `codepath.toml` into the work directory.
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        self.write_config("codepath.toml", content)
    }

    /// Write a config file relative to the work directory.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(&path, content).expect("Failed to write config file");
        path
    }
}
