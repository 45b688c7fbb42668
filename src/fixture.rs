//! Test data for the list scenarios.
//!
//! Elements look like `true0false`, `false1true`, `true2false`, ...: the
//! index wrapped in a flag that alternates starting from `true`. Probes are
//! `true<n/2 + offset>false`. For small fixtures (up to 20 elements) every
//! probe lies past the end, so a search scans the whole list and misses.

use crate::config::FixtureConfig;

/// Probe offsets appended by the "add() on end" scenario.
pub const APPEND_PROBE_OFFSETS: [usize; 4] = [10, 20, 30, 40];

/// Probe offsets searched for by the search scenarios.
pub const SEARCH_PROBE_OFFSETS: [usize; 2] = [10, 20];

/// Generated element sequence plus probe helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    elements: Vec<String>,
}

impl Fixture {
    /// Build a fixture of `element_count` strings.
    pub fn new(element_count: usize) -> Self {
        let elements = (0..element_count)
            .map(|i| tagged(i % 2 == 0, i))
            .collect();
        Self { elements }
    }

    /// Build a fixture from the `[fixture]` configuration section.
    pub fn from_config(config: &FixtureConfig) -> Self {
        Self::new(config.element_count)
    }

    /// The element sequence.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the fixture has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Probe value `offset` positions past the middle of the sequence.
    pub fn probe(&self, offset: usize) -> String {
        tagged(true, self.len() / 2 + offset)
    }

    /// Probe values for each offset, in order.
    pub fn probes(&self, offsets: &[usize]) -> Vec<String> {
        offsets.iter().map(|&offset| self.probe(offset)).collect()
    }
}

fn tagged(flag: bool, index: usize) -> String {
    format!("{}{}{}", flag, index, !flag)
}
