//! # Benchmark Harness
//!
//! Fixed-iteration warmup-then-measure timing and result reporting.
//!
//! ## Example
//!
//! ```rust
//! use list_bench::perf::{BenchmarkCase, BenchmarkRunner};
//!
//! let runner = BenchmarkRunner::new(10, 100);
//! let mut case = BenchmarkCase::new(
//!     "vec push",
//!     || Vec::<u32>::with_capacity(4),
//!     |v: &mut Vec<u32>| v.push(1),
//! );
//!
//! let measurement = runner.run(&mut case).unwrap();
//! println!("{measurement}");
//! ```

pub mod benchmark;
pub mod report;

pub use benchmark::{
    run, BenchmarkCase, BenchmarkRunner, Benchmarkable, Measurement, TimingAccumulator,
};
pub use report::{BenchReport, ReportEntry};
