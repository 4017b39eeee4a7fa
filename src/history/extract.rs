//! History extraction: entries → per-benchmark chronological series

use crate::history::document::Entry;
use std::collections::BTreeMap;

/// Chronological values of one benchmark, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkSeries {
    pub values: Vec<f64>,
    /// Last non-empty unit reported for this benchmark
    pub unit: Option<String>,
}

impl BenchmarkSeries {
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values, unit: None }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Benchmark name → series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    series: BTreeMap<String, BenchmarkSeries>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one observation to the named series
    pub fn push(&mut self, name: &str, value: f64, unit: Option<&str>) {
        let series = self.series.entry(name.to_string()).or_default();
        series.values.push(value);
        if let Some(unit) = unit.filter(|u| !u.is_empty()) {
            series.unit = Some(unit.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&BenchmarkSeries> {
        self.series.get(name)
    }

    /// Iterate benchmarks in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BenchmarkSeries)> {
        self.series.iter().map(|(name, s)| (name.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl FromIterator<(String, Vec<f64>)> for History {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f64>)>>(iter: I) -> Self {
        Self {
            series: iter
                .into_iter()
                .map(|(name, values)| (name, BenchmarkSeries::from_values(values)))
                .collect(),
        }
    }
}

/// Build per-benchmark series from a suite's entries
///
/// Values keep entry order. A benchmark missing from an entry contributes
/// nothing for that run; gaps are not filled.
///
/// # Example
/// ```
/// use perfwatch::history::{extract_history, Entry, Measurement};
///
/// let entries = vec![
///     Entry::new(vec![Measurement::new("a", 1.0), Measurement::new("b", 5.0)]),
///     Entry::new(vec![Measurement::new("a", 2.0)]),
/// ];
/// let history = extract_history(&entries);
/// assert_eq!(history.get("a").unwrap().values, vec![1.0, 2.0]);
/// assert_eq!(history.get("b").unwrap().values, vec![5.0]);
/// ```
pub fn extract_history(entries: &[Entry]) -> History {
    let mut history = History::new();
    for entry in entries {
        for bench in &entry.benches {
            history.push(&bench.name, bench.value, bench.unit.as_deref());
        }
    }
    history
}
