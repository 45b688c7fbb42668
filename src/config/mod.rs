//! # Configuration
//!
//! TOML-based configuration for the list benchmarks: iteration counts for
//! the runner, the fixture size, and logging.
//!
//! Every section is optional. A missing file or an empty document yields the
//! reference settings (10,000 warmup and 100,000 measured iterations over a
//! five element fixture).
//!
//! ## Example Configuration
//!
//! ```toml
//! [runner]
//! warmup_iterations = 1000
//! measured_iterations = 50000
//!
//! [fixture]
//! element_count = 5
//!
//! [logging]
//! level = "debug"
//! format = "compact"
//! ```

mod error;
mod loader;
mod types;
mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use types::{BenchConfig, FixtureConfig, LogFormat, LogLevel, LoggingConfig, RunnerConfig};
pub use validation::{BasicValidator, ValidationError, ValidationResult, Validator};
