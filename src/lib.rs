//! # list-bench
//!
//! Microbenchmarks contrasting an array-backed list ([`Vec`]) with a
//! node-linked list ([`LinkedList`](std::collections::LinkedList)) on
//! appends, bulk appends, searches, and first-match removals.
//!
//! ## Architecture
//!
//! - [`perf`]: the warmup-then-measure runner and reporting
//! - [`list`]: the [`list::SequentialList`] capability over both lists
//! - [`fixture`]: generated elements and probe values
//! - [`scenario`] and [`suite`]: the cases and the runner over all of them
//! - [`config`] and [`logging`]: TOML configuration and `tracing` setup
//!
//! ## Example
//!
//! ```rust
//! use list_bench::perf::run;
//!
//! let measurement = run("push", 0, 10, Vec::new, |v: &mut Vec<u8>| v.push(1)).unwrap();
//! assert_eq!(measurement.measured_iterations, 10);
//! ```

pub mod config;
pub mod error;
pub mod fixture;
pub mod list;
pub mod logging;
pub mod perf;
pub mod scenario;
pub mod suite;

pub use error::{BenchError, BenchResult};
