//! Output path mapping for generated code and samples.

mod common;
mod product;

pub use common::{CommonCodePathMapper, CommonCodePathMapperBuilder};
pub use product::{ProductConfig, ProductSettings};

/// Directory inserted after the prefix for generated samples.
pub const SAMPLES_DIRECTORY: &str = "samples";

/// Computes where a generator writes the files for an element.
pub trait CodePathMapper {
    /// Output directory for code generated from `element_full_name`.
    fn output_path(&self, element_full_name: &str, product: &dyn ProductConfig) -> String;

    /// Output directory for the sample generated for `method_name`.
    fn samples_output_path(
        &self,
        element_full_name: &str,
        product: &dyn ProductConfig,
        method_name: &str,
    ) -> String;
}
