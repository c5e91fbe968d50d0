use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Name;
use crate::domain::AppError;

/// Converts a normalized name into one piece of a package file path.
///
/// Implemented by [`CaseStyle`] and by any `Fn(&Name) -> String` closure, so
/// generators for a new target can plug in their own convention.
pub trait NameFormatter: Send + Sync {
    fn package_file_path_piece(&self, name: &Name) -> String;
}

impl<F> NameFormatter for F
where
    F: Fn(&Name) -> String + Send + Sync,
{
    fn package_file_path_piece(&self, name: &Name) -> String {
        self(name)
    }
}

/// Built-in casing conventions for path pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    /// `ListFoos` kept as given, first letter uppercased.
    Original,
    /// `listfoos`
    Lower,
    /// `ListFoos`
    UpperCamel,
    /// `listFoos`
    LowerCamel,
    /// `list_foos`
    LowerUnderscore,
    /// `LIST_FOOS`
    UpperUnderscore,
    /// `list-foos`
    Kebab,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 7] = [
        CaseStyle::Original,
        CaseStyle::Lower,
        CaseStyle::UpperCamel,
        CaseStyle::LowerCamel,
        CaseStyle::LowerUnderscore,
        CaseStyle::UpperUnderscore,
        CaseStyle::Kebab,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Original => "original",
            CaseStyle::Lower => "lower",
            CaseStyle::UpperCamel => "upper_camel",
            CaseStyle::LowerCamel => "lower_camel",
            CaseStyle::LowerUnderscore => "lower_underscore",
            CaseStyle::UpperUnderscore => "upper_underscore",
            CaseStyle::Kebab => "kebab",
        }
    }

    pub fn apply(&self, name: &Name) -> String {
        match self {
            CaseStyle::Original => name.original().to_string(),
            CaseStyle::Lower => name.to_lowercase(),
            CaseStyle::UpperCamel => name.to_upper_camel(),
            CaseStyle::LowerCamel => name.to_lower_camel(),
            CaseStyle::LowerUnderscore => name.to_lower_underscore(),
            CaseStyle::UpperUnderscore => name.to_upper_underscore(),
            CaseStyle::Kebab => name.to_kebab(),
        }
    }

    /// Parse a formatter setting where `none` means "no formatter".
    pub fn parse_optional(value: &str) -> Result<Option<Self>, AppError> {
        if value.trim().eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl NameFormatter for CaseStyle {
    fn package_file_path_piece(&self, name: &Name) -> String {
        self.apply(name)
    }
}

impl FromStr for CaseStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        CaseStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| AppError::UnknownCaseStyle(s.to_string()))
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
