//! API Facade for the application.
//!
//! Glues configuration discovery to command execution. Each operation has a
//! variant working in the current directory and an `_at` variant taking an
//! explicit root. Only the current-directory variants consult the
//! `CODEPATH_CONFIG` environment variable.

use std::path::{Path, PathBuf};

use crate::adapters::LocalFilesystem;
use crate::app::commands::{output_path, show_config};
use crate::app::config::{LoadedConfig, load_config};
use crate::domain::config::paths::CONFIG_ENV;

pub use crate::app::commands::output_path::{PathKind, PathOutcome, PathRequest};
pub use crate::domain::{AppError, OutputOverrides};

/// Config file named by the `CODEPATH_CONFIG` environment variable.
fn config_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Load configuration for the current directory, honoring `CODEPATH_CONFIG`.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig, AppError> {
    let filesystem = LocalFilesystem::current()?;
    let from_env = config_from_env();
    load_config(&filesystem, explicit, from_env.as_deref())
}

/// Load configuration discovered under `root` only.
pub fn load_at(
    root: impl Into<PathBuf>,
    explicit: Option<&Path>,
) -> Result<LoadedConfig, AppError> {
    let filesystem = LocalFilesystem::new(root.into());
    load_config(&filesystem, explicit, None)
}

/// Compute an element or sample output path in the current directory.
pub fn output_path(
    explicit: Option<&Path>,
    request: PathRequest,
) -> Result<PathOutcome, AppError> {
    let loaded = load(explicit)?;
    output_path::execute(&loaded.config, request)
}

/// Compute an element or sample output path with config discovered under `root`.
pub fn output_path_at(
    root: impl Into<PathBuf>,
    explicit: Option<&Path>,
    request: PathRequest,
) -> Result<PathOutcome, AppError> {
    let loaded = load_at(root, explicit)?;
    output_path::execute(&loaded.config, request)
}

/// Render the resolved configuration for the current directory as TOML.
pub fn show_config(
    explicit: Option<&Path>,
    overrides: &OutputOverrides,
) -> Result<String, AppError> {
    let loaded = load(explicit)?;
    show_config::execute(&loaded.config, overrides)
}

/// Render the resolved configuration discovered under `root` as TOML.
pub fn show_config_at(
    root: impl Into<PathBuf>,
    explicit: Option<&Path>,
    overrides: &OutputOverrides,
) -> Result<String, AppError> {
    let loaded = load_at(root, explicit)?;
    show_config::execute(&loaded.config, overrides)
}
