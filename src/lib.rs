//! codepath: compute output directories for generated client code and samples.
//!
//! The core is [`CommonCodePathMapper`], a pure mapping from a package name
//! (and optionally a sample method) to a `/`-joined relative path:
//!
//! ```
//! use codepath::{CaseStyle, CommonCodePathMapper};
//!
//! let mapper = CommonCodePathMapper::builder()
//!     .prefix("lib")
//!     .append_package(true)
//!     .formatter(CaseStyle::LowerUnderscore)
//!     .build();
//!
//! assert_eq!(
//!     mapper.path_for_element("Google::Cloud::SecretManager"),
//!     "lib/google/cloud/secret_manager"
//! );
//! assert_eq!(
//!     mapper.path_for_sample("Google::Pubsub", "listTopics"),
//!     "lib/samples/google/pubsub/list_topics"
//! );
//! ```

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    PathKind, PathOutcome, PathRequest, load, load_at, output_path, output_path_at, show_config,
    show_config_at,
};
pub use app::config::LoadedConfig;
pub use domain::{
    AppError, CaseStyle, CodePathMapper, CodepathConfig, CommonCodePathMapper,
    CommonCodePathMapperBuilder, Name, NameFormatter, OutputOverrides, OutputSettings,
    ProductConfig, ProductSettings, SAMPLES_DIRECTORY,
};
