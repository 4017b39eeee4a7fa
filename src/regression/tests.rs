// End-to-end scenarios for regression detection
//
// Each scenario feeds a realistic window through extraction, baseline
// estimation and classification with the default threshold (20%) and a
// minimum history of 10 points.

use super::*;
use crate::history::{extract_history, Entry, History, Measurement};

const BENCH: &str = "dev.example.TokenizerBenchmark.tokenizeFile";

fn config() -> RegressionConfig {
    RegressionConfig {
        window_size: 20,
        threshold: 0.20,
        min_history: 10,
    }
}

fn single(values: &[f64]) -> History {
    vec![(BENCH.to_string(), values.to_vec())]
        .into_iter()
        .collect()
}

fn verdict_for(values: &[f64]) -> Verdict {
    let verdicts = assess_history(&single(values), &config()).unwrap();
    assert_eq!(verdicts.len(), 1);
    verdicts.into_iter().next().unwrap()
}

/// Perfectly stable history
///
/// Scenario: ten identical runs
/// Expected: OK with a ratio of exactly 1.0
#[test]
fn test_stable_history_is_ok() {
    let verdict = verdict_for(&[10.0; 10]);

    assert_eq!(verdict.status, Status::Ok);
    assert_eq!(verdict.current, 10.0);
    assert_eq!(verdict.baseline, Some(10.0));
    assert_eq!(verdict.ratio, Some(1.0));
    assert!(verdict.reason.is_none());
}

/// Slowdown on the newest run
///
/// Scenario: nine runs at 10.0, newest at 13.0
/// Expected: Regression at ratio 1.3
#[test]
fn test_slowdown_is_regression() {
    let mut values = vec![10.0; 9];
    values.push(13.0);
    let verdict = verdict_for(&values);

    assert_eq!(verdict.status, Status::Regression);
    assert_eq!(verdict.baseline, Some(10.0));
    assert!((verdict.ratio.unwrap() - 1.3).abs() < 1e-12);
}

/// Noisy spike in the baseline
///
/// Scenario: one 1000.0 outlier just before a 30% slowdown
/// Expected: Outlier filtered, slowdown still flagged
#[test]
fn test_spike_in_baseline_is_filtered() {
    let mut values = vec![10.0; 8];
    values.extend([1000.0, 13.0]);
    let verdict = verdict_for(&values);

    assert_eq!(verdict.status, Status::Regression);
    assert_eq!(verdict.baseline, Some(10.0));
    assert!((verdict.ratio.unwrap() - 1.3).abs() < 1e-12);
}

/// Young benchmark
///
/// Scenario: only five runs, the last one much slower
/// Expected: Skipped for insufficient history
#[test]
fn test_short_history_is_skipped() {
    let verdict = verdict_for(&[10.0, 10.0, 10.0, 10.0, 50.0]);

    assert_eq!(verdict.status, Status::Skip);
    assert_eq!(verdict.current, 50.0);
    assert_eq!(verdict.baseline, None);
    assert_eq!(verdict.ratio, None);
    let reason = verdict.reason.unwrap().to_string();
    assert!(reason.contains('5'), "reason: {reason}");
    assert!(reason.contains("10"), "reason: {reason}");
}

/// All-zero baseline
///
/// Scenario: nine runs at 0.0 then 4.0
/// Expected: Skipped, no ratio can be formed
#[test]
fn test_zero_baseline_is_skipped() {
    let mut values = vec![0.0; 9];
    values.push(4.0);
    let verdict = verdict_for(&values);

    assert_eq!(verdict.status, Status::Skip);
    assert_eq!(verdict.baseline, Some(0.0));
    assert_eq!(verdict.ratio, None);
    assert_eq!(verdict.reason, Some(SkipReason::NonPositiveBaseline));
}

/// Only the last `window_size` points count: an old slow era is forgotten
#[test]
fn test_old_history_outside_window_is_ignored() {
    let mut values = vec![100.0; 30];
    values.extend(vec![10.0; 20]);
    let verdict = verdict_for(&values);

    assert_eq!(verdict.status, Status::Ok);
    assert_eq!(verdict.baseline, Some(10.0));
}

/// Improvements never count as regressions
#[test]
fn test_speedup_is_ok() {
    let mut values = vec![10.0; 15];
    values.push(2.0);
    let verdict = verdict_for(&values);

    assert_eq!(verdict.status, Status::Ok);
    assert!((verdict.ratio.unwrap() - 0.2).abs() < 1e-12);
}

/// Realistic JMH-style noise stays within the threshold
#[test]
fn test_natural_variance_is_ok() {
    let values = [
        31.96, 32.41, 31.12, 33.08, 32.75, 31.88, 32.02, 34.10, 31.55, 32.90, 33.40, 32.11,
    ];
    let verdict = verdict_for(&values);

    assert_eq!(verdict.status, Status::Ok);
    assert!(verdict.ratio.unwrap() < 1.05);
}

/// Mixed suite extracted from entries: gaps, skips and regressions together
#[test]
fn test_mixed_suite_from_entries() {
    let mut entries = Vec::new();
    for run in 0..12 {
        let mut benches = vec![Measurement::new("suite.stable", 5.0)];
        if run >= 8 {
            benches.push(Measurement::new("suite.young", 1.0));
        }
        let slow = if run == 11 { 9.0 } else { 6.0 };
        benches.push(Measurement::new("suite.slow", slow));
        entries.push(Entry::new(benches));
    }

    let history = extract_history(&entries);
    let verdicts = assess_history(&history, &config()).unwrap();
    let statuses: Vec<(&str, Status)> = verdicts
        .iter()
        .map(|v| (v.name.as_str(), v.status))
        .collect();

    assert_eq!(
        statuses,
        vec![
            ("suite.slow", Status::Regression),
            ("suite.stable", Status::Ok),
            ("suite.young", Status::Skip),
        ]
    );
}

/// Tighter thresholds flag smaller slowdowns
#[test]
fn test_threshold_controls_sensitivity() {
    let mut values = vec![10.0; 9];
    values.push(11.5);
    let history = single(&values);

    let default = assess_history(&history, &config()).unwrap();
    assert_eq!(default[0].status, Status::Ok);

    let strict = RegressionConfig {
        threshold: 0.10,
        ..config()
    };
    let tight = assess_history(&history, &strict).unwrap();
    assert_eq!(tight[0].status, Status::Regression);
}
