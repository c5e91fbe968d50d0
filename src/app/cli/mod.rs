//! CLI Adapter.

mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::logging;
use crate::domain::AppError;
use output::OutputArgs;

#[derive(Parser)]
#[command(name = "codepath")]
#[command(version)]
#[command(
    about = "Compute output directories for generated code and samples",
    long_about = None
)]
struct Cli {
    /// Config file (.toml, .yml, .yaml); defaults to ./codepath.toml
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the output directory for an element's generated code
    #[clap(visible_alias = "e")]
    Element {
        /// Package name (defaults to [product].package_name)
        package: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the output directory for a method's generated sample
    #[clap(visible_alias = "s")]
    Sample {
        /// Package name (defaults to [product].package_name)
        package: Option<String>,
        /// Method the sample is generated for
        #[arg(short, long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
        method: String,
        #[command(flatten)]
        output: OutputArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved configuration as TOML
    Config {
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config.as_deref();
    let result: Result<(), AppError> = match cli.command {
        Commands::Element { package, output, json } => {
            output::run_element(config, package, output, json)
        }
        Commands::Sample { package, method, output, json } => {
            output::run_sample(config, package, method, output, json)
        }
        Commands::Config { output } => output::run_config(config, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
