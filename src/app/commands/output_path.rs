//! Element and sample output path commands.

use serde::Serialize;

use crate::domain::{AppError, CodepathConfig, OutputOverrides};

/// Which entry point of the mapper produced a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    Element,
    Sample,
}

/// Inputs for a single path computation.
#[derive(Debug, Clone, Default)]
pub struct PathRequest {
    /// Package name; falls back to `[product].package_name`.
    pub package: Option<String>,
    /// Method name for samples; `None` computes the element path.
    pub method: Option<String>,
    pub overrides: OutputOverrides,
}

impl PathRequest {
    pub fn element(package: Option<String>) -> Self {
        Self { package, ..Default::default() }
    }

    pub fn sample(package: Option<String>, method: impl Into<String>) -> Self {
        Self { package, method: Some(method.into()), ..Default::default() }
    }

    pub fn with_overrides(mut self, overrides: OutputOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// A computed output path and what it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathOutcome {
    pub kind: PathKind,
    pub package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub path: String,
}

impl PathOutcome {
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Compute the output path described by `request` under `config`.
pub fn execute(config: &CodepathConfig, request: PathRequest) -> Result<PathOutcome, AppError> {
    let mut settings = config.output.clone();
    request.overrides.apply(&mut settings);

    let package = request
        .package
        .filter(|package| !package.is_empty())
        .unwrap_or_else(|| config.product.package_name.clone());
    if package.is_empty() && settings.append_package {
        tracing::warn!("no package name given or configured; package segments skipped");
    }

    tracing::debug!(?settings, package = %package, "resolved output settings");
    let mapper = settings.to_mapper();

    let outcome = match request.method {
        Some(method) => PathOutcome {
            kind: PathKind::Sample,
            path: mapper.path_for_sample(&package, &method),
            package,
            method: Some(method),
        },
        None => PathOutcome {
            kind: PathKind::Element,
            path: mapper.path_for_element(&package),
            package,
            method: None,
        },
    };
    Ok(outcome)
}
