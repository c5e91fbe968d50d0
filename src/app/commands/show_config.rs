//! Resolved configuration display.

use crate::domain::config::render_config_toml;
use crate::domain::{AppError, CodepathConfig, OutputOverrides};

/// Render `config` with `overrides` applied, as TOML.
pub fn execute(config: &CodepathConfig, overrides: &OutputOverrides) -> Result<String, AppError> {
    let mut resolved = config.clone();
    overrides.apply(&mut resolved.output);
    render_config_toml(&resolved)
}
