// Regression classification
//
// Lower is better: only an increase of the current value over the baseline by
// more than the configured threshold is a regression. A ratio exactly at the
// limit is OK.

use crate::error::ConfigError;
use crate::history::{BenchmarkSeries, History};
use crate::regression::baseline::{estimate_baseline, BaselineEstimate, SkipReason, Window};
use crate::regression::config::RegressionConfig;
use serde::Serialize;
use std::fmt;

/// Classification status of one benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ok,
    Regression,
    Skip,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Ok => "OK",
            Status::Regression => "REGRESSION",
            Status::Skip => "SKIP",
        };
        f.pad(label)
    }
}

/// Ratio and status for a usable `(current, baseline)` pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub ratio: f64,
    pub status: Status,
}

/// Classify `current` against a positive `baseline`
///
/// # Example
/// ```
/// use perfwatch::regression::{classify, Status};
///
/// assert_eq!(classify(13.0, 10.0, 0.20).status, Status::Regression);
/// assert_eq!(classify(12.0, 10.0, 0.20).status, Status::Ok);
/// ```
pub fn classify(current: f64, baseline: f64, threshold: f64) -> Classification {
    let ratio = current / baseline;
    let status = if ratio > 1.0 + threshold {
        Status::Regression
    } else {
        Status::Ok
    };
    Classification { ratio, status }
}

/// Per-benchmark outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub name: String,
    pub status: Status,
    pub current: f64,
    pub baseline: Option<f64>,
    pub ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<SkipReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Verdict {
    /// Short name for tables: the last `.`-separated segment
    ///
    /// `dev.example.Bench.parse` → `parse`
    pub fn display_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn is_regression(&self) -> bool {
        self.status == Status::Regression
    }

    pub fn is_skip(&self) -> bool {
        self.status == Status::Skip
    }
}

/// Assess one benchmark series
///
/// Returns `None` for an empty series.
pub fn assess_benchmark(
    name: &str,
    series: &BenchmarkSeries,
    config: &RegressionConfig,
) -> Option<Verdict> {
    let window = Window::from_series(&series.values, config.window_size)?;
    let estimate = estimate_baseline(&window, config);

    let verdict = match estimate {
        BaselineEstimate::Skip {
            current,
            baseline,
            reason,
        } => {
            tracing::debug!(
                benchmark = name,
                points = window.len(),
                %reason,
                "skipping benchmark"
            );
            Verdict {
                name: name.to_string(),
                status: Status::Skip,
                current,
                baseline,
                ratio: None,
                reason: Some(reason),
                unit: series.unit.clone(),
            }
        }
        BaselineEstimate::Ready {
            current,
            baseline,
            candidates,
            retained,
        } => {
            let Classification { ratio, status } = classify(current, baseline, config.threshold);
            tracing::debug!(
                benchmark = name,
                points = window.len(),
                candidates,
                retained,
                current,
                baseline,
                ratio,
                "classified benchmark"
            );
            if status == Status::Regression {
                tracing::warn!(
                    benchmark = name,
                    ratio,
                    limit = config.ratio_limit(),
                    "regression detected"
                );
            }
            Verdict {
                name: name.to_string(),
                status,
                current,
                baseline: Some(baseline),
                ratio: Some(ratio),
                reason: None,
                unit: series.unit.clone(),
            }
        }
    };

    Some(verdict)
}

/// Assess every benchmark in a history
///
/// The configuration is validated first. Verdicts come back in name order.
pub fn assess_history(
    history: &History,
    config: &RegressionConfig,
) -> Result<Vec<Verdict>, ConfigError> {
    config.validate()?;

    Ok(history
        .iter()
        .filter_map(|(name, series)| assess_benchmark(name, series, config))
        .collect())
}
