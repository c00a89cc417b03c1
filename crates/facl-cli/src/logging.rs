//! Logging setup for the `facl` binary.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here also captures those records. Output goes to stderr so stdout carries
//! only command results.

use tracing_subscriber::EnvFilter;

/// The filter directive for a config level and a `-v` count.
pub fn filter_directive(config_level: &str, verbose: u8) -> String {
    match verbose {
        0 => config_level.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. `RUST_LOG` wins over everything else.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(config_level: &str, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config_level, verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
