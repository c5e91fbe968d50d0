//! Configuration discovery and loading.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::config::{self, CodepathConfig, ConfigFormat};
use crate::ports::ConfigFilesystem;

/// Configuration together with the file it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: CodepathConfig,
    /// `None` when built-in defaults were used.
    pub source: Option<PathBuf>,
}

/// Load configuration, in order of precedence, from:
///
/// 1. `explicit` (the `--config` flag), which must exist,
/// 2. `from_env` (the `CODEPATH_CONFIG` variable), which must exist,
/// 3. `codepath.toml` in the filesystem root, if present,
/// 4. built-in defaults.
pub fn load_config<F: ConfigFilesystem>(
    filesystem: &F,
    explicit: Option<&Path>,
    from_env: Option<&Path>,
) -> Result<LoadedConfig, AppError> {
    if let Some(path) = explicit.or(from_env) {
        if !filesystem.file_exists(path) {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }
        return read_config(filesystem, path);
    }

    let default_path = config::paths::config(Path::new(""));
    if filesystem.file_exists(&default_path) {
        return read_config(filesystem, &default_path);
    }

    tracing::debug!("no {} found; using defaults", config::paths::CONFIG_FILE);
    Ok(LoadedConfig::default())
}

fn read_config<F: ConfigFilesystem>(filesystem: &F, path: &Path) -> Result<LoadedConfig, AppError> {
    let format = ConfigFormat::from_path(path)?;
    let content = filesystem.read_file(path)?;
    let config = config::parse_config_content(&content, format)?;
    tracing::debug!(path = %path.display(), ?format, "loaded config");
    Ok(LoadedConfig { config, source: Some(path.to_path_buf()) })
}
