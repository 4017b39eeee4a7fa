//! Perfwatch - benchmark regression detection for CI pipelines
//!
//! This library reads the benchmark history kept by github-action-benchmark,
//! compares the newest measurement of every benchmark against an
//! outlier-filtered median of its recent history, and reports the result as
//! console lines, a Markdown job summary and a pass/fail outcome.

pub mod cli;
pub mod error;
pub mod history;
pub mod json_output;
pub mod regression;
pub mod report;

pub use error::{ConfigError, HistoryError, ReportError};
