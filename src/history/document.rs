//! Parsing of the github-action-benchmark `data.js` history file
//!
//! The file is a JSON object, optionally wrapped as
//! `window.BENCHMARK_DATA = {...}` so the dashboard page can load it as a script.
//! Suites stay as raw JSON until one is selected; only the selected suite's
//! entries are typed, and only `benches[].name`, `value` and `unit` are read.

use crate::error::HistoryError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Assignment prefix stripped before JSON parsing
pub const DATA_JS_PREFIX: &str = "window.BENCHMARK_DATA = ";

/// Top-level history document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BenchmarkData {
    /// Suite name → raw entry list, oldest first
    #[serde(default)]
    pub entries: BTreeMap<String, Value>,
}

impl BenchmarkData {
    /// Entries of a suite, or `None` if the suite has no history yet
    ///
    /// Other suites are never inspected, so malformed data elsewhere in the
    /// document does not affect this one.
    pub fn suite(&self, name: &str) -> Result<Option<Vec<Entry>>, HistoryError> {
        self.entries
            .get(name)
            .map(|raw| {
                Vec::<Entry>::deserialize(raw).map_err(|source| HistoryError::Suite {
                    suite: name.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Names of all suites in the document (sorted)
    pub fn suite_names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

/// One historical benchmark run
///
/// Commit, date and tool metadata are ignored whatever their shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub benches: Vec<Measurement>,
}

impl Entry {
    pub fn new(benches: Vec<Measurement>) -> Self {
        Self { benches }
    }
}

/// A single benchmark measurement (lower is better)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit: Option<String>,
}

impl Measurement {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Units are display-only: anything but a string reads as absent
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Parse history text, stripping the `window.BENCHMARK_DATA = ` wrapper if present
///
/// # Example
/// ```
/// use perfwatch::history::parse_benchmark_data;
///
/// let text = r#"window.BENCHMARK_DATA = {"entries": {"suite": []}}"#;
/// let data = parse_benchmark_data(text).unwrap();
/// assert_eq!(data.suite_names(), vec!["suite"]);
/// ```
pub fn parse_benchmark_data(text: &str) -> Result<BenchmarkData, HistoryError> {
    let json = text.strip_prefix(DATA_JS_PREFIX).unwrap_or(text).trim();
    let json = json.strip_suffix(';').unwrap_or(json);
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a history file
pub fn load_benchmark_data(path: &Path) -> Result<BenchmarkData, HistoryError> {
    let text = std::fs::read_to_string(path).map_err(|source| HistoryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_benchmark_data(&text)
}
