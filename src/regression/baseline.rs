// Baseline estimation over a bounded window of recent measurements
//
// The newest point in the window is the current value. The remaining points
// are IQR-filtered and reduced to their median. When the filter rejects every
// candidate the unfiltered set is used instead, so the baseline is never taken
// from an empty sample.

use crate::regression::config::RegressionConfig;
use crate::regression::statistics::{iqr_filter, median};
use serde::Serialize;
use std::fmt;

/// Right-aligned slice of a benchmark's chronological values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<'a> {
    values: &'a [f64],
}

impl<'a> Window<'a> {
    /// Take the last `window_size` values (fewer if the series is shorter)
    ///
    /// Returns `None` for an empty series.
    pub fn from_series(values: &'a [f64], window_size: usize) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let start = values.len().saturating_sub(window_size.max(1));
        Some(Self {
            values: &values[start..],
        })
    }

    /// Most recent value in the window
    pub fn current(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// All values preceding the current one
    pub fn baseline_candidates(&self) -> &'a [f64] {
        &self.values[..self.values.len() - 1]
    }

    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Why a benchmark was not classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Window shorter than `min_history`
    InsufficientHistory { points: usize, required: usize },
    /// Baseline median is zero or negative, so no ratio can be formed
    NonPositiveBaseline,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InsufficientHistory { points, required } => {
                write!(f, "only {points} data points (need {required})")
            }
            SkipReason::NonPositiveBaseline => write!(f, "baseline median is zero or negative"),
        }
    }
}

/// Outcome of baseline estimation for one benchmark
#[derive(Debug, Clone, PartialEq)]
pub enum BaselineEstimate {
    /// Baseline is usable for classification (always > 0)
    Ready {
        current: f64,
        baseline: f64,
        /// Number of baseline candidates in the window
        candidates: usize,
        /// Candidates that survived the IQR filter (or all of them on fallback)
        retained: usize,
    },
    /// Benchmark cannot be classified
    Skip {
        current: f64,
        baseline: Option<f64>,
        reason: SkipReason,
    },
}

impl BaselineEstimate {
    pub fn current(&self) -> f64 {
        match self {
            BaselineEstimate::Ready { current, .. } | BaselineEstimate::Skip { current, .. } => {
                *current
            }
        }
    }

    pub fn baseline(&self) -> Option<f64> {
        match self {
            BaselineEstimate::Ready { baseline, .. } => Some(*baseline),
            BaselineEstimate::Skip { baseline, .. } => *baseline,
        }
    }
}

/// Estimate the baseline for a window of measurements
///
/// # Example
/// ```
/// use perfwatch::regression::{estimate_baseline, BaselineEstimate, RegressionConfig, Window};
///
/// let mut values = vec![10.0; 8];
/// values.extend([1000.0, 13.0]);
/// let window = Window::from_series(&values, 20).unwrap();
///
/// match estimate_baseline(&window, &RegressionConfig::default()) {
///     BaselineEstimate::Ready { current, baseline, retained, .. } => {
///         assert_eq!(current, 13.0);
///         assert_eq!(baseline, 10.0);
///         assert_eq!(retained, 8); // the 1000.0 spike was dropped
///     }
///     other => panic!("unexpected estimate: {other:?}"),
/// }
/// ```
pub fn estimate_baseline(window: &Window<'_>, config: &RegressionConfig) -> BaselineEstimate {
    let current = window.current();

    if window.len() < config.min_history {
        return BaselineEstimate::Skip {
            current,
            baseline: None,
            reason: SkipReason::InsufficientHistory {
                points: window.len(),
                required: config.min_history,
            },
        };
    }

    let candidates = window.baseline_candidates();
    let mut cleaned = iqr_filter(candidates);
    if cleaned.is_empty() {
        cleaned = candidates.to_vec();
    }

    // min_history >= 1 only guarantees the current point; a window of one has
    // no candidates, which is treated like a zero baseline.
    let baseline = median(&cleaned).unwrap_or(0.0);
    if baseline <= 0.0 {
        return BaselineEstimate::Skip {
            current,
            baseline: Some(baseline),
            reason: SkipReason::NonPositiveBaseline,
        };
    }

    BaselineEstimate::Ready {
        current,
        baseline,
        candidates: candidates.len(),
        retained: cleaned.len(),
    }
}
