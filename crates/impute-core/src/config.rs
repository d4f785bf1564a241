//! Analysis configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default IQR fence multiplier (Tukey's fences)
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Default outlier fraction below which numeric columns are capped
pub const DEFAULT_OUTLIER_THRESHOLD: f64 = 0.05;

/// Tunable thresholds for one analysis run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Width of the IQR fences in multiples of the IQR
    pub iqr_multiplier: f64,
    /// Outlier fraction below which capping is preferred
    pub outlier_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
            outlier_threshold: DEFAULT_OUTLIER_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    /// Create a validated configuration
    pub fn new(iqr_multiplier: f64, outlier_threshold: f64) -> Result<Self> {
        let config = Self {
            iqr_multiplier,
            outlier_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the IQR multiplier
    pub fn with_iqr_multiplier(mut self, iqr_multiplier: f64) -> Self {
        self.iqr_multiplier = iqr_multiplier;
        self
    }

    /// Set the capping threshold
    pub fn with_outlier_threshold(mut self, outlier_threshold: f64) -> Self {
        self.outlier_threshold = outlier_threshold;
        self
    }

    /// Check that every parameter is in range
    pub fn validate(&self) -> Result<()> {
        Error::check_multiplier(self.iqr_multiplier)?;
        Error::check_proportion("outlier threshold", self.outlier_threshold)
    }

    /// Parse and validate a configuration from JSON
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
