//! Runs every scenario against every list kind.

use crate::config::BenchConfig;
use crate::error::BenchResult;
use crate::fixture::Fixture;
use crate::list::ListKind;
use crate::perf::{BenchReport, BenchmarkRunner, Measurement};
use crate::scenario::Scenario;
use tracing::info;

/// Name used for reports produced by [`BenchmarkSuite`].
pub const SUITE_NAME: &str = "Array List vs Linked List";

/// The full set of list benchmarks sharing one runner and fixture.
#[derive(Debug, Clone)]
pub struct BenchmarkSuite {
    runner: BenchmarkRunner,
    fixture: Fixture,
}

impl BenchmarkSuite {
    /// Create a suite with an explicit runner and fixture.
    pub fn new(runner: BenchmarkRunner, fixture: Fixture) -> Self {
        Self { runner, fixture }
    }

    /// Create a suite from configuration.
    pub fn from_config(config: &BenchConfig) -> Self {
        Self::new(
            BenchmarkRunner::from_config(&config.runner),
            Fixture::from_config(&config.fixture),
        )
    }

    /// The runner every case uses.
    pub fn runner(&self) -> &BenchmarkRunner {
        &self.runner
    }

    /// The fixture every case uses.
    pub fn fixture(&self) -> &Fixture {
        &self.fixture
    }

    /// Run a single case.
    ///
    /// # Errors
    ///
    /// Propagates runner errors.
    pub fn run_scenario(&self, scenario: Scenario, kind: ListKind) -> BenchResult<Measurement> {
        scenario.run(kind, &self.runner, &self.fixture)
    }

    /// Run every case and collect a report.
    ///
    /// # Errors
    ///
    /// Stops at the first failing case.
    pub fn run_all(&self) -> BenchResult<BenchReport> {
        self.run_all_with(|_| {})
    }

    /// Run every case, calling `on_result` as each one completes.
    ///
    /// Scenarios run in [`Scenario::ALL`] order, array list before linked
    /// list within each scenario.
    ///
    /// # Errors
    ///
    /// Stops at the first failing case.
    pub fn run_all_with<F>(&self, mut on_result: F) -> BenchResult<BenchReport>
    where
        F: FnMut(&Measurement),
    {
        info!(
            warmup = self.runner.warmup_iterations(),
            measured = self.runner.measured_iterations(),
            elements = self.fixture.len(),
            "Running list benchmarks"
        );

        let mut report = BenchReport::new(SUITE_NAME);
        for scenario in Scenario::ALL {
            for kind in ListKind::ALL {
                let measurement = self.run_scenario(scenario, kind)?;
                on_result(&measurement);
                report.add(scenario.label(), measurement);
            }
        }

        info!(cases = report.len(), "List benchmarks complete");
        Ok(report)
    }
}
