//! Tracing subscriber setup for the binary.
//!
//! The filter is read from `PROTOMAP_LOG`, then `RUST_LOG`, defaulting to
//! `warn` (`debug` when verbose). `log` records emitted by the configuration
//! loader are bridged into the same subscriber.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "PROTOMAP_LOG";

fn build_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "protomap=debug" } else { "warn" };

    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber, writing to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
