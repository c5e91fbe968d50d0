use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "codepath.toml";

/// Environment variable naming a config file to load.
pub const CONFIG_ENV: &str = "CODEPATH_CONFIG";

/// `<root>/codepath.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
