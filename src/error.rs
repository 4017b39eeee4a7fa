//! Error types for history loading, configuration and report output

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the benchmark history document
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to read benchmark data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid benchmark data JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid entries for suite '{suite}': {source}")]
    Suite {
        suite: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised for invalid regression configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors raised while writing the Markdown summary
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to append summary to {path}: {source}")]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
