//! Pure parse for codepath configuration files.

use std::path::Path;

use crate::domain::AppError;
use crate::domain::config::CodepathConfig;

/// Serialization format of a config file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension =
            path.extension().and_then(|ext| ext.to_str()).unwrap_or_default().to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "yml" | "yaml" => Ok(ConfigFormat::Yaml),
            _ => Err(AppError::UnsupportedConfigFormat(path.display().to_string())),
        }
    }
}

/// Parse configuration content in the given format.
///
/// Blank content yields the default configuration.
pub fn parse_config_content(
    content: &str,
    format: ConfigFormat,
) -> Result<CodepathConfig, AppError> {
    if content.trim().is_empty() {
        return Ok(CodepathConfig::default());
    }
    let config = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(config)
}

/// Render configuration as TOML.
pub fn render_config_toml(config: &CodepathConfig) -> Result<String, AppError> {
    Ok(toml::to_string(config)?)
}
