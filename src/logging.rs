//! Logging setup.
//!
//! Installs a `tracing-subscriber` formatter writing to stderr, so stdout
//! only carries benchmark results. `RUST_LOG` overrides the configured
//! level when set.

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{BenchError, BenchResult};
use tracing_subscriber::EnvFilter;

/// Build the filter for `config`, preferring `RUST_LOG` when present.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`BenchError::Logging`] if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> BenchResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| BenchError::Logging(e.to_string()))
}
