//! Diagnostic logging
//!
//! Events go to stderr through a `tracing` fmt subscriber so stdout carries
//! only the game itself.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `debug` or `pica_centro=trace`
pub const LOG_ENV_VAR: &str = "PICA_CENTRO_LOG";

/// Filter used when the environment variable is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

fn filter_from(value: Option<&str>) -> EnvFilter {
    value
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    let filter = filter_from(std::env::var(LOG_ENV_VAR).ok().as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_filter() {
        assert_eq!(filter_from(None).to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn uses_given_filter() {
        assert_eq!(filter_from(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging();
        init_logging();
    }
}
