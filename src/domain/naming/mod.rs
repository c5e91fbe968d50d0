//! Identifier naming: normalized names and the formatters that turn them
//! into path pieces.

mod formatter;
mod name;

pub use formatter::{CaseStyle, NameFormatter};
pub use name::Name;
