//! Codepath configuration domain models.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::naming::CaseStyle;
use crate::domain::path_mapper::{CommonCodePathMapper, ProductSettings};

/// Configuration loaded from `codepath.toml` (or a YAML equivalent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodepathConfig {
    /// How output paths are built.
    #[serde(default)]
    pub output: OutputSettings,
    /// Product the generated code belongs to.
    #[serde(default)]
    pub product: ProductSettings,
}

/// The `[output]` section: inputs to [`CommonCodePathMapper`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    /// Leading path segment, used verbatim. Empty means none.
    #[serde(default)]
    pub prefix: String,
    /// Whether package segments are appended after the prefix.
    #[serde(default)]
    pub append_package: bool,
    /// Case style for path pieces. Absent (or `"none"`) lowercases segments.
    #[serde(
        default,
        deserialize_with = "deserialize_formatter",
        skip_serializing_if = "Option::is_none"
    )]
    pub formatter: Option<CaseStyle>,
}

impl OutputSettings {
    /// Build the immutable mapper described by these settings.
    pub fn to_mapper(&self) -> CommonCodePathMapper {
        let builder = CommonCodePathMapper::builder()
            .prefix(&self.prefix)
            .append_package(self.append_package);
        match self.formatter {
            Some(style) => builder.formatter(style).build(),
            None => builder.build(),
        }
    }
}

fn deserialize_formatter<'de, D>(deserializer: D) -> Result<Option<CaseStyle>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value {
        Some(value) => CaseStyle::parse_optional(&value).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Command-line overrides layered on top of loaded settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOverrides {
    pub prefix: Option<String>,
    pub append_package: Option<bool>,
    /// `Some(None)` clears a configured formatter.
    pub formatter: Option<Option<CaseStyle>>,
}

impl OutputOverrides {
    pub fn apply(&self, settings: &mut OutputSettings) {
        if let Some(prefix) = &self.prefix {
            settings.prefix = prefix.clone();
        }
        if let Some(append_package) = self.append_package {
            settings.append_package = append_package;
        }
        if let Some(formatter) = self.formatter {
            settings.formatter = formatter;
        }
    }
}
