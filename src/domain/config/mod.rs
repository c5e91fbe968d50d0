pub mod parse;
pub mod paths;
mod settings;

pub use parse::{ConfigFormat, parse_config_content, render_config_toml};
pub use settings::{CodepathConfig, OutputOverrides, OutputSettings};
