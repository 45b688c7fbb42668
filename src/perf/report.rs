//! Benchmark reporting.
//!
//! Collects measurements under named groups and renders them as a
//! human-readable table or as JSON.

use super::benchmark::Measurement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A measurement tagged with the group it is reported under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Group heading, e.g. the operation under test.
    pub group: String,
    /// The measurement itself.
    #[serde(flatten)]
    pub measurement: Measurement,
}

impl ReportEntry {
    /// Operations per second implied by the mean, or zero for an empty mean.
    pub fn throughput(&self) -> f64 {
        let mean = self.measurement.mean().as_secs_f64();
        if mean > 0.0 {
            1.0 / mean
        } else {
            0.0
        }
    }
}

/// Accumulates measurements and produces reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    /// Suite name shown in the header.
    pub suite_name: String,
    /// RFC 3339 creation time.
    pub timestamp: String,
    /// Entries in the order they were added.
    pub entries: Vec<ReportEntry>,
}

impl BenchReport {
    /// Create an empty report stamped with the current time.
    pub fn new(suite_name: impl Into<String>) -> Self {
        Self {
            suite_name: suite_name.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            entries: Vec::new(),
        }
    }

    /// Add a measurement under `group`.
    pub fn add(&mut self, group: impl Into<String>, measurement: Measurement) {
        self.entries.push(ReportEntry {
            group: group.into(),
            measurement,
        });
    }

    /// Measurements in insertion order.
    pub fn measurements(&self) -> impl Iterator<Item = &Measurement> {
        self.entries.iter().map(|e| &e.measurement)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One `Benchmark "<name>" took <N> ns/run` line per entry.
    pub fn lines(&self) -> String {
        let mut out = String::new();
        for m in self.measurements() {
            out.push_str(&format!("{}\n", m));
        }
        out
    }

    /// Produce a grouped summary table as a string.
    pub fn summary(&self) -> String {
        // Groups keep first-seen order
        let mut order: Vec<&str> = Vec::new();
        let mut groups: BTreeMap<&str, Vec<&ReportEntry>> = BTreeMap::new();
        for entry in &self.entries {
            if !groups.contains_key(entry.group.as_str()) {
                order.push(&entry.group);
            }
            groups.entry(&entry.group).or_default().push(entry);
        }

        let mut out = String::new();
        out.push_str(&format!("=== {} ===\n", self.suite_name));
        out.push_str(&format!("Timestamp: {}\n\n", self.timestamp));

        for group in order {
            out.push_str(&format!("── {} ──\n", group));
            out.push_str(&format!(
                "  {:<36} {:>12} {:>14}\n",
                "Benchmark", "Mean (ns)", "Throughput"
            ));
            out.push_str(&format!("  {}\n", "─".repeat(64)));
            for entry in &groups[group] {
                out.push_str(&format!(
                    "  {:<36} {:>12} {:>14}\n",
                    entry.measurement.name,
                    entry.measurement.mean_nanos,
                    format_throughput(entry.throughput())
                ));
            }
            out.push('\n');
        }
        out
    }

    /// Serialize the report to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn format_throughput(ops_per_sec: f64) -> String {
    if ops_per_sec > 1_000_000.0 {
        format!("{:.2}M ops/s", ops_per_sec / 1_000_000.0)
    } else if ops_per_sec > 1_000.0 {
        format!("{:.2}K ops/s", ops_per_sec / 1_000.0)
    } else {
        format!("{:.2} ops/s", ops_per_sec)
    }
}
