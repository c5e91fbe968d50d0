//! Diagnostic logging setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr.
///
/// `verbose` of 0 defers to `RUST_LOG` (default `warn`); 1 enables debug and
/// 2 or more enables trace output for this crate.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("codepath=debug"),
        _ => EnvFilter::new("codepath=trace"),
    };

    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
