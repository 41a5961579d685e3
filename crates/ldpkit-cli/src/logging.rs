//! Diagnostic logging setup

use crate::config::CliConfig;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to the configured verbosity
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_filter()))
}

/// Install the global subscriber; diagnostics go to stderr.
///
/// Returns `false` when a subscriber was already installed.
pub fn init(config: &CliConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false)
        .with_ansi(config.color.should_color())
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
