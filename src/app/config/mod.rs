mod load_config;

pub use load_config::{LoadedConfig, load_config};
