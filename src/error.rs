//! Benchmark error types.

use crate::config::ConfigError;
use thiserror::Error;

/// Boxed error raised by a fallible setup or measure step.
pub type CaseError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A benchmark case was given an empty display name.
    #[error("benchmark name cannot be empty")]
    EmptyName,

    /// The measured phase needs at least one iteration to produce a mean.
    #[error("benchmark '{name}' needs at least one measured iteration")]
    NoMeasuredIterations {
        /// Name of the rejected case.
        name: String,
    },

    /// The setup or measured step of a case failed.
    #[error("benchmark '{name}' failed: {source}")]
    CaseFailed {
        /// Name of the failing case.
        name: String,
        /// Error returned by the step.
        #[source]
        source: CaseError,
    },

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The logging subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type for benchmark operations.
pub type BenchResult<T> = Result<T, BenchError>;
