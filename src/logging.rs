//! Diagnostic logging setup
//!
//! Logs go to stderr so they never interleave with the game grid on stdout.
//! `RUST_LOG` takes precedence over the verbosity flag.

use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter for a `-v` count
#[must_use]
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "multi_wordle=warn",
        1 => "multi_wordle=info",
        2 => "multi_wordle=debug",
        _ => "multi_wordle=trace",
    }
}

/// Install the global subscriber
///
/// # Panics
/// Panics if a global subscriber has already been installed.
pub fn init_tracing(verbosity: u8) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(verbosity, "tracing initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_filter(0), "multi_wordle=warn");
        assert_eq!(default_filter(2), "multi_wordle=debug");
        assert_eq!(default_filter(9), "multi_wordle=trace");
    }

    #[test]
    fn filters_parse() {
        for verbosity in 0..4 {
            assert!(EnvFilter::try_new(default_filter(verbosity)).is_ok());
        }
    }
}
