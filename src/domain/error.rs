use std::io;

use thiserror::Error;

/// Library-wide error type for codepath operations.
///
/// Path computation itself never fails; these errors come from loading
/// configuration and driving the mapper from the command line.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Config file extension is not one of toml, yml, yaml.
    #[error("Unsupported config format '{0}': expected .toml, .yml or .yaml")]
    UnsupportedConfigFormat(String),

    /// Formatter name does not match a known case style.
    #[error(
        "Unknown case style '{0}': must be one of none, original, lower, upper_camel, \
         lower_camel, lower_underscore, upper_underscore, kebab"
    )]
    UnknownCaseStyle(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::UnsupportedConfigFormat(_)
            | AppError::UnknownCaseStyle(_)
            | AppError::TomlParseError(_)
            | AppError::YamlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_) => io::ErrorKind::NotFound,
            AppError::TomlSerializeError(_) | AppError::JsonError(_) => io::ErrorKind::InvalidData,
        }
    }
}
