use serde::{Deserialize, Serialize};

/// Product-level settings a path mapper reads from.
pub trait ProductConfig {
    /// Dotted, colon or backslash delimited package name.
    fn package_name(&self) -> &str;
}

impl ProductConfig for String {
    fn package_name(&self) -> &str {
        self
    }
}

/// The `[product]` section of a codepath config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductSettings {
    #[serde(default)]
    pub package_name: String,
}

impl ProductConfig for ProductSettings {
    fn package_name(&self) -> &str {
        &self.package_name
    }
}
