// IQR-filtered baseline regression detection
//
// Pipeline per benchmark:
// 1. Take the last `window_size` values; the newest is the current value.
// 2. Skip when the window holds fewer than `min_history` points.
// 3. Drop baseline candidates outside [Q1 - 1.5*IQR, Q3 + 1.5*IQR]
//    (falling back to all candidates if none survive).
// 4. Baseline = median of the remaining candidates; skip if it is <= 0.
// 5. Regression when current / baseline > 1 + threshold.
//
// Lower values are better throughout, so only slowdowns are flagged.

mod baseline;
mod config;
mod statistics;
mod verdict;

pub use baseline::{estimate_baseline, BaselineEstimate, SkipReason, Window};
pub use config::RegressionConfig;
pub use statistics::{iqr_bounds, iqr_filter, median, quartiles, IQR_FENCE, MIN_IQR_SAMPLES};
pub use verdict::{assess_benchmark, assess_history, classify, Classification, Status, Verdict};

#[cfg(test)]
mod tests;
