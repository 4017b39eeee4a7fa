//! JSON output format for regression checks
//!
//! `--format json` prints one document per run for machine consumption.

use crate::regression::{RegressionConfig, Verdict};
use crate::report::RegressionReport;
use serde::Serialize;

/// Complete JSON output for one suite check
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    /// Suite that was checked
    pub suite: &'a str,
    /// False when the suite has no recorded history yet
    pub history_found: bool,
    pub config: &'a RegressionConfig,
    pub regression_count: usize,
    pub passed: bool,
    pub verdicts: &'a [Verdict],
}

impl<'a> JsonReport<'a> {
    pub fn from_report(suite: &'a str, report: &'a RegressionReport) -> Self {
        Self {
            suite,
            history_found: true,
            config: report.config(),
            regression_count: report.regression_count(),
            passed: report.passed(),
            verdicts: report.verdicts(),
        }
    }

    /// Document for a suite with no history (nothing checked, passes)
    pub fn missing_suite(suite: &'a str, config: &'a RegressionConfig) -> Self {
        Self {
            suite,
            history_found: false,
            config,
            regression_count: 0,
            passed: true,
            verdicts: &[],
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
