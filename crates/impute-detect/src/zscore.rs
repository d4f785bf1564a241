//! Z-score detector

use crate::traits::{Detection, OutlierDetector};
use impute_core::numeric::{mean, non_missing, population_std_dev};

/// Default absolute z-score above which a value is flagged
pub const DEFAULT_ZSCORE_THRESHOLD: f64 = 3.0;

/// Flag values whose absolute population z-score exceeds `threshold`
///
/// Missing entries are dropped first. A zero standard deviation means every
/// present value equals the mean, so nothing is flagged.
pub fn detect_outliers_zscore(values: &[Option<f64>], threshold: f64) -> Vec<f64> {
    zscore_detection(values, threshold).outliers
}

fn zscore_detection(values: &[Option<f64>], threshold: f64) -> Detection {
    let clean = non_missing(values);
    let (Some(mean), Some(std_dev)) = (mean(&clean), population_std_dev(&clean)) else {
        return Detection::empty();
    };

    // No variance, no outliers. Comparing values directly avoids flagging a
    // constant column through rounding error in the mean.
    let constant = clean.windows(2).all(|pair| pair[0] == pair[1]);
    if constant || std_dev == 0.0 || !std_dev.is_finite() {
        return Detection::empty();
    }

    let outliers = clean
        .into_iter()
        .filter(|&x| ((x - mean) / std_dev).abs() > threshold)
        .collect();

    Detection {
        outliers,
        lower_bound: Some(mean - threshold * std_dev),
        upper_bound: Some(mean + threshold * std_dev),
    }
}

/// Z-score detector with a fixed threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScore {
    threshold: f64,
}

impl ZScore {
    /// Create a detector flagging `|z| > threshold`
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Absolute z-score threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ZScore {
    fn default() -> Self {
        Self::new(DEFAULT_ZSCORE_THRESHOLD)
    }
}

impl OutlierDetector for ZScore {
    fn name(&self) -> &'static str {
        "Z-score"
    }

    fn detect(&self, values: &[Option<f64>]) -> Detection {
        zscore_detection(values, self.threshold)
    }
}
