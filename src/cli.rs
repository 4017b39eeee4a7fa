//! CLI argument parsing for perfwatch

use crate::regression::RegressionConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Built-in regression settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Window 20, threshold 20%, min history 10
    Default,
    /// Window 30, threshold 10%, min history 15
    Strict,
    /// Window 10, threshold 50%, min history 5
    Permissive,
}

impl Preset {
    pub fn config(self) -> RegressionConfig {
        match self {
            Preset::Default => RegressionConfig::default(),
            Preset::Strict => RegressionConfig::strict(),
            Preset::Permissive => RegressionConfig::permissive(),
        }
    }
}

/// Output format for check results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable progress lines and verdicts (default)
    Text,
    /// Single JSON document on stdout
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "perfwatch")]
#[command(version)]
#[command(
    about = "Detect benchmark regressions against an IQR-filtered median baseline",
    long_about = None
)]
#[command(after_help = "Exit status: 0 no regression (or no history yet), 1 regression detected, 2 usage error.\n\
If GITHUB_STEP_SUMMARY is set, a Markdown summary is appended to that file.")]
pub struct Cli {
    /// Benchmark history file (github-action-benchmark data.js or plain JSON)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Suite name to check within the history file
    #[arg(value_name = "SUITE")]
    pub suite: String,

    /// TOML file with window_size, threshold and min_history
    #[arg(long = "config", value_name = "FILE", conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Built-in settings to use instead of a config file
    #[arg(long = "preset", value_enum, default_value = "default")]
    pub preset: Preset,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
