//! Diagnostic logging setup.
//!
//! Log events go to stderr so that stdout carries only the report.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "PARETO_CHECK_LOG";

/// Install the global tracing subscriber.
///
/// `PARETO_CHECK_LOG` takes precedence; otherwise `warn`, or `debug` when
/// `verbose` is set. Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
