pub mod config;
pub mod error;
pub mod naming;
pub mod path_mapper;

pub use config::{CodepathConfig, ConfigFormat, OutputOverrides, OutputSettings};
pub use error::AppError;
pub use naming::{CaseStyle, Name, NameFormatter};
pub use path_mapper::{
    CodePathMapper, CommonCodePathMapper, CommonCodePathMapperBuilder, ProductConfig,
    ProductSettings, SAMPLES_DIRECTORY,
};
