//! Diagnostic logging setup
//!
//! Library code reports through `tracing`; the binary installs a stderr
//! subscriber whose level follows the verbosity flags unless the
//! `VERRANGE_LOG` environment variable provides a filter.

use crate::config::LOG_ENV;
use crate::output::Verbosity;
use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity level
pub fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "debug",
    }
}

/// Build the filter, preferring `VERRANGE_LOG` when it is set and valid
pub fn build_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Install the global subscriber writing to stderr
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: Verbosity, color: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(color)
        .without_time()
        .try_init();
}
