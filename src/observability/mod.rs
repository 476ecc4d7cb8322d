//! # Observability
//!
//! Process-wide `tracing` subscriber setup. Modules log through the
//! `tracing` macros; this only decides filtering and output format.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "artfolio=info,tower_http=info";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Build the level filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed, e.g. by a test harness.
pub fn init_tracing(format: LogFormat) -> Result<(), tracing_subscriber::util::TryInitError> {
    let json = format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        let _ = init_tracing(LogFormat::Text);
        assert!(init_tracing(LogFormat::Json).is_err());
    }

    #[test]
    fn test_default_format() {
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }
}
