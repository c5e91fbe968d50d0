//! Path and config command implementations.

use std::path::Path;

use clap::Args;

use crate::app::api::{self, PathRequest};
use crate::domain::{AppError, CaseStyle, OutputOverrides};

/// Overrides for the `[output]` section shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Leading path segment (overrides [output].prefix)
    #[arg(long)]
    prefix: Option<String>,
    /// Append package segments (overrides [output].append_package)
    #[arg(long, value_name = "BOOL")]
    append_package: Option<bool>,
    /// Case style for path pieces, or `none` for plain lowercase
    #[arg(long, value_name = "STYLE", value_parser = parse_formatter)]
    formatter: Option<FormatterArg>,
}

/// Parsed `--formatter` value; `None` inside means "no formatter".
#[derive(Debug, Clone, Copy)]
struct FormatterArg(Option<CaseStyle>);

fn parse_formatter(value: &str) -> Result<FormatterArg, AppError> {
    CaseStyle::parse_optional(value).map(FormatterArg)
}

impl From<OutputArgs> for OutputOverrides {
    fn from(args: OutputArgs) -> Self {
        OutputOverrides {
            prefix: args.prefix,
            append_package: args.append_package,
            formatter: args.formatter.map(|arg| arg.0),
        }
    }
}

pub fn run_element(
    config: Option<&Path>,
    package: Option<String>,
    output: OutputArgs,
    json: bool,
) -> Result<(), AppError> {
    let request = PathRequest::element(package).with_overrides(output.into());
    print_outcome(config, request, json)
}

pub fn run_sample(
    config: Option<&Path>,
    package: Option<String>,
    method: String,
    output: OutputArgs,
    json: bool,
) -> Result<(), AppError> {
    let request = PathRequest::sample(package, method).with_overrides(output.into());
    print_outcome(config, request, json)
}

pub fn run_config(config: Option<&Path>, output: OutputArgs) -> Result<(), AppError> {
    let rendered = api::show_config(config, &output.into())?;
    print!("{}", rendered);
    Ok(())
}

fn print_outcome(config: Option<&Path>, request: PathRequest, json: bool) -> Result<(), AppError> {
    let outcome = api::output_path(config, request)?;
    if json {
        println!("{}", outcome.to_json()?);
    } else {
        println!("{}", outcome.path);
    }
    Ok(())
}
