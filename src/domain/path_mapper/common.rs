use std::fmt;
use std::sync::Arc;

use super::{CodePathMapper, ProductConfig, SAMPLES_DIRECTORY};
use crate::domain::naming::{Name, NameFormatter};

/// Characters that separate package segments across ecosystems
/// (`google.cloud`, `Google::Cloud`, `Google\Cloud`).
const PACKAGE_SEPARATORS: [char; 3] = ['.', ':', '\\'];

/// Maps a package name to an output directory built from an optional prefix
/// and, optionally, the formatted package segments.
///
/// The mapper is immutable once built and safe to share across threads.
#[derive(Clone, Default)]
pub struct CommonCodePathMapper {
    prefix: String,
    append_package: bool,
    formatter: Option<Arc<dyn NameFormatter>>,
}

impl CommonCodePathMapper {
    pub fn builder() -> CommonCodePathMapperBuilder {
        CommonCodePathMapperBuilder::default()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn append_package(&self) -> bool {
        self.append_package
    }

    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    /// Output directory for code generated from `package_name`.
    pub fn path_for_element(&self, package_name: &str) -> String {
        self.compute_path(package_name, None)
    }

    /// Output directory for the sample of `method_name` in `package_name`.
    pub fn path_for_sample(&self, package_name: &str, method_name: &str) -> String {
        self.compute_path(package_name, Some(method_name))
    }

    /// Build the `/`-joined output path.
    ///
    /// Segments are, in order: the prefix (if non-empty), the samples
    /// directory (for samples only), the package segments (if enabled), and
    /// the sample name (for samples only). Runs of separators such as `::`
    /// never produce empty segments. Returns an empty string when nothing
    /// was collected.
    pub fn compute_path(&self, package_name: &str, sample_name: Option<&str>) -> String {
        let sample = sample_name.filter(|name| !name.is_empty());
        let mut dirs: Vec<String> = Vec::new();

        if !self.prefix.is_empty() {
            dirs.push(self.prefix.clone());
        }

        if sample.is_some() {
            dirs.push(SAMPLES_DIRECTORY.to_string());
        }

        if self.append_package && !package_name.is_empty() {
            dirs.extend(
                package_name
                    .split(PACKAGE_SEPARATORS)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| self.format(segment)),
            );
        }

        if let Some(sample) = sample {
            dirs.push(self.format(sample));
        }

        let path = dirs.join("/");
        tracing::trace!(
            package = package_name,
            sample = ?sample,
            path = %path,
            "computed output path"
        );
        path
    }

    fn format(&self, segment: &str) -> String {
        match &self.formatter {
            Some(formatter) => formatter.package_file_path_piece(&Name::upper_camel(segment)),
            None => segment.to_lowercase(),
        }
    }
}

impl CodePathMapper for CommonCodePathMapper {
    fn output_path(&self, _element_full_name: &str, product: &dyn ProductConfig) -> String {
        self.path_for_element(product.package_name())
    }

    fn samples_output_path(
        &self,
        _element_full_name: &str,
        product: &dyn ProductConfig,
        method_name: &str,
    ) -> String {
        self.path_for_sample(product.package_name(), method_name)
    }
}

impl fmt::Debug for CommonCodePathMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommonCodePathMapper")
            .field("prefix", &self.prefix)
            .field("append_package", &self.append_package)
            .field("formatter", &self.formatter.as_ref().map(|_| "<formatter>"))
            .finish()
    }
}

/// Fluent builder for [`CommonCodePathMapper`].
#[derive(Default)]
pub struct CommonCodePathMapperBuilder {
    prefix: String,
    append_package: bool,
    formatter: Option<Arc<dyn NameFormatter>>,
}

impl CommonCodePathMapperBuilder {
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn append_package(mut self, append_package: bool) -> Self {
        self.append_package = append_package;
        self
    }

    pub fn formatter<F: NameFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Set or clear the formatter; `None` restores the lowercase fallback.
    pub fn formatter_opt(mut self, formatter: Option<Arc<dyn NameFormatter>>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn build(self) -> CommonCodePathMapper {
        CommonCodePathMapper {
            prefix: self.prefix,
            append_package: self.append_package,
            formatter: self.formatter,
        }
    }
}
