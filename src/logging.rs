//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.

use std::error::Error;
use std::io::stderr;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Directive used when `RUST_LOG` is unset and `--verbose` is off.
pub const DEFAULT_DIRECTIVE: &str = "pitch_stats=info";

/// Directive used when `RUST_LOG` is unset and `--verbose` is on.
pub const VERBOSE_DIRECTIVE: &str = "pitch_stats=debug";

/// Pick the filter directive: `RUST_LOG` wins over the verbosity flag.
pub fn filter_directive(rust_log: Option<&str>, verbose: bool) -> String {
    match rust_log.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value.to_string(),
        None if verbose => VERBOSE_DIRECTIVE.to_string(),
        None => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), verbose);

    let filter = EnvFilter::try_new(&directive)
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVE))
        .map_err(Box::<dyn Error + Send + Sync>::from)?;

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init()
        .map_err(Box::<dyn Error + Send + Sync>::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_without_env() {
        assert_eq!(filter_directive(None, false), DEFAULT_DIRECTIVE);
        assert_eq!(filter_directive(None, true), VERBOSE_DIRECTIVE);
    }

    #[test]
    fn test_rust_log_overrides_verbose() {
        assert_eq!(filter_directive(Some("pitch_stats=trace"), true), "pitch_stats=trace");
        assert_eq!(filter_directive(Some("  "), true), VERBOSE_DIRECTIVE);
    }

    #[test]
    fn test_init_logging_twice_fails() {
        // Another test may have installed a subscriber first; either way the
        // second call in this process must be rejected.
        let _ = init_logging(false);
        match init_logging(false) {
            Err(crate::error::StatsError::Logging { .. }) => (),
            other => panic!("Expected Logging error, got {:?}", other),
        }
    }
}
