//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Reference warmup iteration count.
pub const DEFAULT_WARMUP_ITERATIONS: u64 = 10_000;

/// Reference measured iteration count.
pub const DEFAULT_MEASURED_ITERATIONS: u64 = 100_000;

/// Reference fixture size.
pub const DEFAULT_ELEMENT_COUNT: usize = 5;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BenchConfig {
    /// Iteration counts for every benchmark case.
    pub runner: RunnerConfig,

    /// Size of the element sequence the scenarios operate on.
    pub fixture: FixtureConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Runner section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunnerConfig {
    /// Untimed iterations executed before measurement starts.
    pub warmup_iterations: u64,

    /// Timed iterations whose mean is reported. Must be positive.
    pub measured_iterations: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            measured_iterations: DEFAULT_MEASURED_ITERATIONS,
        }
    }
}

impl RunnerConfig {
    /// Create a runner configuration with explicit iteration counts.
    #[must_use]
    pub fn new(warmup_iterations: u64, measured_iterations: u64) -> Self {
        Self {
            warmup_iterations,
            measured_iterations,
        }
    }
}

/// Fixture section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FixtureConfig {
    /// Number of elements in the generated sequence.
    pub element_count: usize,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            element_count: DEFAULT_ELEMENT_COUNT,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: LogLevel,

    /// Log format (json, pretty, compact).
    pub format: LogFormat,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level (most verbose).
    Trace,
    /// Debug level.
    Debug,
    /// Info level (default).
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level (least verbose).
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (machine-readable).
    Json,
    /// Pretty format with colors (default).
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
}
