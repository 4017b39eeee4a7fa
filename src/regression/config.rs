// Configuration for IQR-based regression detection
//
// Window size, threshold and minimum history are carried in one struct that is
// passed into the estimator and classifier, so tests can vary them freely.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for regression detection
///
/// # Example
/// ```
/// use perfwatch::regression::RegressionConfig;
///
/// let config = RegressionConfig::default();
/// assert_eq!(config.window_size, 20);
/// assert_eq!(config.threshold, 0.20);
/// assert_eq!(config.min_history, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionConfig {
    /// Maximum number of most recent data points considered per benchmark
    ///
    /// The newest point is the "current" value; the remaining points form
    /// the baseline candidates.
    pub window_size: usize,

    /// Relative slowdown tolerated before flagging a regression
    ///
    /// 0.20 means the current value may be up to 1.20x the baseline.
    /// Exactly 1.20x is still OK.
    pub threshold: f64,

    /// Minimum number of points in the window required to classify
    ///
    /// Benchmarks with a shorter window are reported as SKIP.
    pub min_history: usize,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self {
            window_size: 20,
            threshold: 0.20,
            min_history: 10,
        }
    }
}

impl RegressionConfig {
    /// Create a strict configuration (longer history, tighter threshold)
    pub fn strict() -> Self {
        Self {
            window_size: 30,
            threshold: 0.10,
            min_history: 15,
        }
    }

    /// Create a permissive configuration (short history, loose threshold)
    ///
    /// Useful for young suites that only have a handful of runs.
    pub fn permissive() -> Self {
        Self {
            window_size: 10,
            threshold: 0.50,
            min_history: 5,
        }
    }

    /// Load a configuration from a TOML file
    ///
    /// Missing keys fall back to the defaults. The result is validated.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Ratio above which the current value counts as a regression
    pub fn ratio_limit(&self) -> f64 {
        1.0 + self.threshold
    }

    /// Threshold expressed as a percentage (0.20 -> 20.0)
    pub fn threshold_percent(&self) -> f64 {
        self.threshold * 100.0
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::Invalid(
                "window_size must be at least 1".to_string(),
            ));
        }

        if self.min_history == 0 {
            return Err(ConfigError::Invalid(
                "min_history must be at least 1".to_string(),
            ));
        }

        if self.min_history > self.window_size {
            return Err(ConfigError::Invalid(format!(
                "min_history ({}) cannot exceed window_size ({})",
                self.min_history, self.window_size
            )));
        }

        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "threshold must be a non-negative fraction, got {}",
                self.threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegressionConfig::default();
        assert_eq!(config.window_size, 20);
        assert_eq!(config.threshold, 0.20);
        assert_eq!(config.min_history, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_config() {
        let config = RegressionConfig::strict();
        assert_eq!(config.threshold, 0.10);
        assert_eq!(config.min_history, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_permissive_config() {
        let config = RegressionConfig::permissive();
        assert_eq!(config.threshold, 0.50);
        assert_eq!(config.min_history, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ratio_limit_and_percent() {
        let config = RegressionConfig::default();
        assert!((config.ratio_limit() - 1.2).abs() < 1e-12);
        assert!((config.threshold_percent() - 20.0).abs() < 1e-9);
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_window_size() {
        let mut config = RegressionConfig::default();
        config.window_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_min_history_exceeds_window() {
        let mut config = RegressionConfig::default();
        config.min_history = 21;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("cannot exceed window_size"));
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_threshold() {
        let mut config = RegressionConfig::default();
        config.threshold = -0.1;
        assert!(config.validate().is_err());

        config.threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = RegressionConfig::from_toml_str("threshold = 0.35\n").unwrap();
        assert_eq!(config.threshold, 0.35);
        assert_eq!(config.window_size, 20);
        assert_eq!(config.min_history, 10);
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        let result = RegressionConfig::from_toml_str("window_size = 5\nmin_history = 8\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_toml_rejects_bad_syntax() {
        let result = RegressionConfig::from_toml_str("window_size = \"many\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}
