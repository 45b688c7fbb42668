//! Benchmarking framework.
//!
//! A case is a name, a setup step that builds fresh state, and a measured
//! step that mutates that state. The runner executes `warmup` untimed
//! iterations, then `measured` timed ones, and reports the mean wall-clock
//! duration of the measured step alone.

use crate::config::RunnerConfig;
use crate::error::{BenchError, BenchResult, CaseError};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// A benchmark case with a name, per-iteration setup, and a measured step.
pub trait Benchmarkable {
    /// State rebuilt by [`setup`](Self::setup) before every iteration.
    type State;

    /// Display name used when reporting.
    fn name(&self) -> &str;

    /// Build fresh state for one iteration. Never timed.
    fn setup(&mut self) -> Self::State;

    /// The operation being timed.
    fn measure(&mut self, state: &mut Self::State);
}

/// Closure-backed [`Benchmarkable`].
pub struct BenchmarkCase<S, M> {
    name: String,
    setup: S,
    measure: M,
}

impl<S, M> BenchmarkCase<S, M> {
    /// Bundle a name with its setup and measured closures.
    pub fn new(name: impl Into<String>, setup: S, measure: M) -> Self {
        Self {
            name: name.into(),
            setup,
            measure,
        }
    }
}

impl<S, M> fmt::Debug for BenchmarkCase<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T, S, M> Benchmarkable for BenchmarkCase<S, M>
where
    S: FnMut() -> T,
    M: FnMut(&mut T),
{
    type State = T;

    fn name(&self) -> &str {
        &self.name
    }

    fn setup(&mut self) -> T {
        (self.setup)()
    }

    fn measure(&mut self, state: &mut T) {
        (self.measure)(state)
    }
}

/// Running total of measured time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimingAccumulator {
    total: Duration,
    iterations: u64,
}

impl TimingAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one measured iteration.
    pub fn record(&mut self, elapsed: Duration) {
        self.total += elapsed;
        self.iterations += 1;
    }

    /// Total accumulated time.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Number of recorded iterations.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Total time in nanoseconds, saturating at `u64::MAX`.
    pub fn total_nanos(&self) -> u64 {
        u64::try_from(self.total.as_nanos()).unwrap_or(u64::MAX)
    }

    /// Mean nanoseconds per iteration, truncated. Zero when nothing was
    /// recorded.
    pub fn mean_nanos(&self) -> u64 {
        self.total_nanos()
            .checked_div(self.iterations)
            .unwrap_or_default()
    }
}

/// Outcome of one benchmark case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Case name.
    pub name: String,
    /// Untimed iterations executed first.
    pub warmup_iterations: u64,
    /// Timed iterations.
    pub measured_iterations: u64,
    /// Sum of the measured step's durations.
    pub total_nanos: u64,
    /// `total_nanos / measured_iterations`.
    pub mean_nanos: u64,
}

impl Measurement {
    fn from_accumulator(name: &str, warmup_iterations: u64, timings: &TimingAccumulator) -> Self {
        Self {
            name: name.to_string(),
            warmup_iterations,
            measured_iterations: timings.iterations(),
            total_nanos: timings.total_nanos(),
            mean_nanos: timings.mean_nanos(),
        }
    }

    /// Mean duration per measured iteration.
    pub fn mean(&self) -> Duration {
        Duration::from_nanos(self.mean_nanos)
    }

    /// Total measured duration.
    pub fn total(&self) -> Duration {
        Duration::from_nanos(self.total_nanos)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Benchmark \"{}\" took {} ns/run", self.name, self.mean_nanos)
    }
}

/// Fixed-iteration warmup-then-measure runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkRunner {
    warmup_iterations: u64,
    measured_iterations: u64,
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self::from_config(&RunnerConfig::default())
    }
}

impl BenchmarkRunner {
    /// Create a runner with explicit iteration counts.
    pub fn new(warmup_iterations: u64, measured_iterations: u64) -> Self {
        Self {
            warmup_iterations,
            measured_iterations,
        }
    }

    /// Create a runner from the `[runner]` configuration section.
    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::new(config.warmup_iterations, config.measured_iterations)
    }

    /// Untimed iterations per case.
    pub fn warmup_iterations(&self) -> u64 {
        self.warmup_iterations
    }

    /// Timed iterations per case.
    pub fn measured_iterations(&self) -> u64 {
        self.measured_iterations
    }

    /// Run a case.
    ///
    /// # Errors
    ///
    /// Returns an error, before invoking the case, if its name is empty or
    /// the runner has no measured iterations.
    pub fn run<B: Benchmarkable>(&self, case: &mut B) -> BenchResult<Measurement> {
        let name = case.name().to_string();
        self.execute(&name, Unfailing(case))
    }

    /// Run a case whose steps can fail. The first error aborts the run.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::CaseFailed`] wrapping the first error returned
    /// by `setup` or `measure`, plus the parameter errors of
    /// [`run`](Self::run).
    pub fn try_run<T, E, S, M>(
        &self,
        name: &str,
        setup: S,
        measure: M,
    ) -> BenchResult<Measurement>
    where
        E: Into<CaseError>,
        S: FnMut() -> Result<T, E>,
        M: FnMut(&mut T) -> Result<(), E>,
    {
        self.execute(name, Fallible { setup, measure })
    }

    fn execute<C: Steps>(&self, name: &str, mut case: C) -> BenchResult<Measurement> {
        if name.is_empty() {
            return Err(BenchError::EmptyName);
        }
        if self.measured_iterations == 0 {
            return Err(BenchError::NoMeasuredIterations {
                name: name.to_string(),
            });
        }

        let failed = |e: C::Error| BenchError::CaseFailed {
            name: name.to_string(),
            source: e.into(),
        };

        debug!(
            benchmark = name,
            iterations = self.warmup_iterations,
            "Starting warmup"
        );
        for _ in 0..self.warmup_iterations {
            let mut state = case.setup().map_err(failed)?;
            case.measure(&mut state).map_err(failed)?;
            drop(black_box(state));
        }

        debug!(
            benchmark = name,
            iterations = self.measured_iterations,
            "Starting measurement"
        );
        let mut timings = TimingAccumulator::new();
        for _ in 0..self.measured_iterations {
            let mut state = case.setup().map_err(failed)?;
            let start = Instant::now();
            let outcome = case.measure(black_box(&mut state));
            let elapsed = start.elapsed();
            outcome.map_err(failed)?;
            timings.record(elapsed);
            drop(black_box(state));
        }

        let measurement = Measurement::from_accumulator(name, self.warmup_iterations, &timings);
        info!(
            benchmark = name,
            mean_ns = measurement.mean_nanos,
            total_ns = measurement.total_nanos,
            iterations = measurement.measured_iterations,
            "Benchmark complete"
        );
        Ok(measurement)
    }
}

/// Setup and measured steps as the runner drives them.
trait Steps {
    type State;
    type Error: Into<CaseError>;

    fn setup(&mut self) -> Result<Self::State, Self::Error>;

    fn measure(&mut self, state: &mut Self::State) -> Result<(), Self::Error>;
}

struct Unfailing<'a, B>(&'a mut B);

impl<B: Benchmarkable> Steps for Unfailing<'_, B> {
    type State = B::State;
    type Error = Infallible;

    fn setup(&mut self) -> Result<B::State, Infallible> {
        Ok(self.0.setup())
    }

    fn measure(&mut self, state: &mut B::State) -> Result<(), Infallible> {
        self.0.measure(state);
        Ok(())
    }
}

struct Fallible<S, M> {
    setup: S,
    measure: M,
}

impl<T, E, S, M> Steps for Fallible<S, M>
where
    E: Into<CaseError>,
    S: FnMut() -> Result<T, E>,
    M: FnMut(&mut T) -> Result<(), E>,
{
    type State = T;
    type Error = E;

    fn setup(&mut self) -> Result<T, E> {
        (self.setup)()
    }

    fn measure(&mut self, state: &mut T) -> Result<(), E> {
        (self.measure)(state)
    }
}

/// Run one case with explicit iteration counts.
///
/// # Errors
///
/// See [`BenchmarkRunner::run`].
pub fn run<T, S, M>(
    name: &str,
    warmup_iterations: u64,
    measured_iterations: u64,
    setup: S,
    measure: M,
) -> BenchResult<Measurement>
where
    S: FnMut() -> T,
    M: FnMut(&mut T),
{
    BenchmarkRunner::new(warmup_iterations, measured_iterations)
        .run(&mut BenchmarkCase::new(name, setup, measure))
}
