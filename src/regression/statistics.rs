// Robust statistics for baseline estimation
//
// Quartiles use the median-of-halves method: for n sorted values the lower
// half is s[..n/2] and the upper half is s[(n+1)/2..], so the middle element
// of an odd-length sample belongs to neither half.

/// Minimum sample size for which quartiles are estimated
///
/// Below this size the IQR filter returns its input unchanged.
pub const MIN_IQR_SAMPLES: usize = 4;

/// Multiplier applied to the IQR to derive the acceptance fences
pub const IQR_FENCE: f64 = 1.5;

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Median of a sample (mean of the two middle values for even lengths)
///
/// Returns `None` for an empty sample.
///
/// # Example
/// ```
/// use perfwatch::regression::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// assert_eq!(median(&[]), None);
/// ```
pub fn median(values: &[f64]) -> Option<f64> {
    median_of_sorted(&sorted(values))
}

/// First and third quartile via the median-of-halves method
///
/// Returns `None` when fewer than [`MIN_IQR_SAMPLES`] values are given.
pub fn quartiles(values: &[f64]) -> Option<(f64, f64)> {
    let n = values.len();
    if n < MIN_IQR_SAMPLES {
        return None;
    }
    let s = sorted(values);
    let q1 = median_of_sorted(&s[..n / 2])?;
    let q3 = median_of_sorted(&s[(n + 1) / 2..])?;
    Some((q1, q3))
}

/// Inclusive acceptance range `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`
pub fn iqr_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let (q1, q3) = quartiles(values)?;
    let iqr = q3 - q1;
    Some((q1 - IQR_FENCE * iqr, q3 + IQR_FENCE * iqr))
}

/// Drop values outside the IQR fences, keeping the original order
///
/// Samples smaller than [`MIN_IQR_SAMPLES`] are returned unchanged. The result
/// may be empty; callers decide how to fall back.
pub fn iqr_filter(values: &[f64]) -> Vec<f64> {
    match iqr_bounds(values) {
        Some((lo, hi)) => values
            .iter()
            .copied()
            .filter(|v| (lo..=hi).contains(v))
            .collect(),
        None => values.to_vec(),
    }
}
