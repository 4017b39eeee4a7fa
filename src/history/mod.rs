//! Benchmark history input
//!
//! [`document`] loads the `data.js` file written by github-action-benchmark
//! and [`extract`] turns one suite's entries into per-benchmark series.

pub mod document;
pub mod extract;

pub use document::{
    load_benchmark_data, parse_benchmark_data, BenchmarkData, Entry, Measurement, DATA_JS_PREFIX,
};
pub use extract::{extract_history, BenchmarkSeries, History};
