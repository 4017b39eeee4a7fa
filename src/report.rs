//! Regression report: console lines, Markdown summary and pass/fail outcome
//!
//! The Markdown section is appended to the file named by `GITHUB_STEP_SUMMARY`
//! so repeated checks in one workflow job accumulate in the job summary.

use crate::error::ReportError;
use crate::regression::{RegressionConfig, Verdict};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable naming the Markdown summary file
pub const SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Placeholder for absent baseline/ratio cells
pub const PLACEHOLDER: &str = "—";

/// Aggregate decision for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    /// Process exit status: 0 for pass, 1 for fail
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Pass => 0,
            Outcome::Fail => 1,
        }
    }
}

/// All verdicts of one run, sorted by benchmark name
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionReport {
    verdicts: Vec<Verdict>,
    config: RegressionConfig,
}

impl RegressionReport {
    pub fn new(mut verdicts: Vec<Verdict>, config: RegressionConfig) -> Self {
        verdicts.sort_by(|a, b| a.name.cmp(&b.name));
        Self { verdicts, config }
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    pub fn config(&self) -> &RegressionConfig {
        &self.config
    }

    pub fn regressions(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| v.is_regression())
    }

    pub fn regression_count(&self) -> usize {
        self.regressions().count()
    }

    pub fn passed(&self) -> bool {
        self.regression_count() == 0
    }

    pub fn outcome(&self) -> Outcome {
        if self.passed() {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    /// One progress line per benchmark
    pub fn console_lines(&self) -> Vec<String> {
        self.verdicts
            .iter()
            .map(|v| match &v.reason {
                Some(reason) => format!("  {:4}  {}: {}", v.status, v.name, reason),
                None => format!(
                    "  {:4}  {}: current={:.4} baseline={:.4} ratio={:.2}x",
                    v.status,
                    v.name,
                    v.current,
                    v.baseline.unwrap_or_default(),
                    v.ratio.unwrap_or_default()
                ),
            })
            .collect()
    }

    /// Final decision, restating every regressing benchmark
    pub fn conclusion_lines(&self) -> Vec<String> {
        if self.passed() {
            return vec!["All benchmarks within acceptable range.".to_string()];
        }

        let mut lines = vec![format!(
            "REGRESSION DETECTED in {} benchmark(s):",
            self.regression_count()
        )];
        for v in self.regressions() {
            let unit = v.unit.as_deref().map(|u| format!(" {u}")).unwrap_or_default();
            lines.push(format!(
                "  {}: {:.4}{unit} vs baseline {:.4}{unit} ({:.2}x, >{:.2}x threshold)",
                v.name,
                v.current,
                v.baseline.unwrap_or_default(),
                v.ratio.unwrap_or_default(),
                self.config.ratio_limit(),
            ));
        }
        lines
    }

    /// Unit shared by every benchmark, if there is exactly one
    fn common_unit(&self) -> Option<&str> {
        let mut units = self.verdicts.iter().map(|v| v.unit.as_deref());
        let first = units.next()??;
        units.all(|u| u == Some(first)).then_some(first)
    }

    /// Markdown section for the job summary
    pub fn to_markdown(&self) -> String {
        let mut lines = vec!["## Benchmark Regression Check".to_string(), String::new()];

        if self.passed() {
            lines.push("All benchmarks within acceptable range.".to_string());
        } else {
            lines.push(format!(
                "**{} regression(s) detected.**",
                self.regression_count()
            ));
        }

        let unit = self
            .common_unit()
            .map(|u| format!(" ({u})"))
            .unwrap_or_default();
        lines.push(String::new());
        lines.push(format!(
            "| Benchmark | Current{unit} | Baseline{unit} | Ratio | Status |"
        ));
        lines.push("|-----------|--------:|---------:|------:|--------|".to_string());

        for v in &self.verdicts {
            let baseline = v
                .baseline
                .map(|b| format!("{b:.2}"))
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            let ratio = v
                .ratio
                .map(|r| format!("{r:.2}x"))
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            let status = match &v.reason {
                Some(reason) => format!("{} ({reason})", v.status),
                None => v.status.to_string(),
            };
            lines.push(format!(
                "| {} | {:.2} | {baseline} | {ratio} | {status} |",
                v.display_name(),
                v.current
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "Window: {} runs, threshold: {:.0}%, min history: {}",
            self.config.window_size,
            self.config.threshold_percent(),
            self.config.min_history
        ));

        let mut markdown = lines.join("\n");
        markdown.push('\n');
        markdown
    }
}

/// Append-only Markdown summary file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySink {
    path: PathBuf,
}

impl SummarySink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sink named by `GITHUB_STEP_SUMMARY`; unset or empty means no sink
    pub fn from_env() -> Option<Self> {
        std::env::var_os(SUMMARY_ENV)
            .filter(|path| !path.is_empty())
            .map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the report's Markdown section, creating the file if needed
    pub fn append(&self, report: &RegressionReport) -> Result<(), ReportError> {
        let sink_error = |source| ReportError::Sink {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(sink_error)?;
        file.write_all(report.to_markdown().as_bytes())
            .map_err(sink_error)?;
        tracing::debug!(path = %self.path.display(), "appended summary");
        Ok(())
    }
}
