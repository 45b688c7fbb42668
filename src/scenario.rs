//! The list scenarios.
//!
//! Each scenario pairs a setup that builds a fresh list with a measured
//! step, and runs once per [`ListKind`]. Lists hold `&str` borrowed from the
//! [`Fixture`], so the measured step never allocates strings.

use crate::error::BenchResult;
use crate::fixture::{Fixture, APPEND_PROBE_OFFSETS, SEARCH_PROBE_OFFSETS};
use crate::list::{ListKind, SequentialList};
use crate::perf::{BenchmarkCase, BenchmarkRunner, Measurement};
use serde::{Deserialize, Serialize};
use std::collections::LinkedList;
use std::fmt;
use std::hint::black_box;

/// A list operation under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Bulk-append the fixture to an empty list.
    AppendAll,
    /// Append the fixture one element at a time to an empty list.
    AppendFromScratch,
    /// Append four probes to a list that was grown element by element.
    AppendOnEnd,
    /// Remove two probes from a filled list.
    SearchAndRemove,
    /// Look up two probes in a filled list.
    Search,
}

impl Scenario {
    /// Every scenario, in run order.
    pub const ALL: [Scenario; 5] = [
        Scenario::AppendAll,
        Scenario::AppendFromScratch,
        Scenario::AppendOnEnd,
        Scenario::SearchAndRemove,
        Scenario::Search,
    ];

    /// Operation label used in case names and report groups.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AppendAll => "addAll()",
            Self::AppendFromScratch => "add() from scratch",
            Self::AppendOnEnd => "add() on end",
            Self::SearchAndRemove => "search and remove",
            Self::Search => "search",
        }
    }

    /// Case name for this scenario on `kind`, e.g. `Linked List search`.
    pub fn case_name(&self, kind: ListKind) -> String {
        format!("{} {}", kind.label(), self.label())
    }

    /// Probe offsets the measured step uses.
    pub fn probe_offsets(&self) -> &'static [usize] {
        match self {
            Self::AppendAll | Self::AppendFromScratch => &[],
            Self::AppendOnEnd => &APPEND_PROBE_OFFSETS,
            Self::SearchAndRemove | Self::Search => &SEARCH_PROBE_OFFSETS,
        }
    }

    /// Run this scenario against `kind`.
    ///
    /// # Errors
    ///
    /// Propagates runner errors, see [`BenchmarkRunner::run`].
    pub fn run(
        &self,
        kind: ListKind,
        runner: &BenchmarkRunner,
        fixture: &Fixture,
    ) -> BenchResult<Measurement> {
        let probes = fixture.probes(self.probe_offsets());
        let probes: Vec<&str> = probes.iter().map(String::as_str).collect();
        let elements: Vec<&str> = fixture.elements().iter().map(String::as_str).collect();

        let name = self.case_name(kind);
        match kind {
            ListKind::Array => self.run_on::<Vec<&str>>(name, runner, &elements, &probes),
            ListKind::Linked => self.run_on::<LinkedList<&str>>(name, runner, &elements, &probes),
        }
    }

    fn run_on<'a, L>(
        &self,
        name: String,
        runner: &BenchmarkRunner,
        elements: &[&'a str],
        probes: &[&'a str],
    ) -> BenchResult<Measurement>
    where
        L: SequentialList<&'a str>,
    {
        match self {
            Self::AppendAll => runner.run(&mut BenchmarkCase::new(
                name,
                || L::default(),
                |list: &mut L| list.append_all(elements),
            )),
            Self::AppendFromScratch => runner.run(&mut BenchmarkCase::new(
                name,
                || L::default(),
                |list: &mut L| {
                    for &element in elements {
                        list.append(element);
                    }
                },
            )),
            Self::AppendOnEnd => runner.run(&mut BenchmarkCase::new(
                name,
                || {
                    // Grown one element at a time so the next append may
                    // land on a full backing array
                    let mut list = L::default();
                    for &element in elements {
                        list.append(element);
                    }
                    list
                },
                |list: &mut L| {
                    for &probe in probes {
                        list.append(probe);
                    }
                },
            )),
            Self::SearchAndRemove => runner.run(&mut BenchmarkCase::new(
                name,
                || filled::<L>(elements),
                |list: &mut L| {
                    for probe in probes {
                        black_box(list.remove_first(probe));
                    }
                },
            )),
            Self::Search => runner.run(&mut BenchmarkCase::new(
                name,
                || filled::<L>(elements),
                |list: &mut L| {
                    for probe in probes {
                        black_box(list.contains(probe));
                    }
                },
            )),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// List presized for `elements` and bulk-filled with them.
fn filled<'a, L: SequentialList<&'a str>>(elements: &[&'a str]) -> L {
    let mut list = L::with_capacity(elements.len());
    list.append_all(elements);
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_runner() -> BenchmarkRunner {
        BenchmarkRunner::new(2, 5)
    }

    #[test]
    fn test_case_names() {
        assert_eq!(
            Scenario::AppendAll.case_name(ListKind::Array),
            "Array List addAll()"
        );
        assert_eq!(
            Scenario::AppendFromScratch.case_name(ListKind::Linked),
            "Linked List add() from scratch"
        );
        assert_eq!(
            Scenario::SearchAndRemove.case_name(ListKind::Array),
            "Array List search and remove"
        );
    }

    #[test]
    fn test_every_scenario_runs_on_every_kind() {
        let fixture = Fixture::new(5);
        let runner = quick_runner();

        for scenario in Scenario::ALL {
            for kind in ListKind::ALL {
                let measurement = scenario.run(kind, &runner, &fixture).unwrap();
                assert_eq!(measurement.name, scenario.case_name(kind));
                assert_eq!(measurement.warmup_iterations, 2);
                assert_eq!(measurement.measured_iterations, 5);
            }
        }
    }

    #[test]
    fn test_filled_matches_fixture_order() {
        let fixture = Fixture::new(5);
        let elements: Vec<&str> = fixture.elements().iter().map(String::as_str).collect();

        let array: Vec<&str> = filled(&elements);
        let linked: LinkedList<&str> = filled(&elements);

        assert_eq!(array, elements);
        assert_eq!(linked.to_vec(), elements);
    }

    #[test]
    fn test_zero_measured_iterations_fails() {
        let fixture = Fixture::new(5);
        let runner = BenchmarkRunner::new(0, 0);

        assert!(Scenario::Search
            .run(ListKind::Linked, &runner, &fixture)
            .is_err());
    }

    #[test]
    fn test_probe_offsets() {
        assert!(Scenario::AppendAll.probe_offsets().is_empty());
        assert_eq!(Scenario::AppendOnEnd.probe_offsets().len(), 4);
        assert_eq!(Scenario::Search.probe_offsets(), [10, 20]);
    }

    #[test]
    fn test_scenario_serde_names() {
        let json = serde_json::to_string(&Scenario::SearchAndRemove).unwrap();
        assert_eq!(json, "\"search_and_remove\"");
    }
}
