//! Interquartile range (Tukey fence) detector

use crate::traits::{Detection, OutlierDetector};
use impute_core::numeric::{non_missing, quantile_sorted, sorted};
use impute_core::DEFAULT_IQR_MULTIPLIER;

/// Flag values outside `[Q1 - m*IQR, Q3 + m*IQR]`
///
/// Missing entries are dropped first. Quartiles use linear interpolation
/// between closest ranks. Outliers keep their column order.
///
/// When the IQR is zero (e.g. a near-constant column) both fences collapse
/// onto Q1 and every value different from it is flagged. A fence that is
/// undefined because the quartiles are infinite is reported as `None`.
///
/// # Examples
///
/// ```rust
/// use impute_detect::detect_outliers_iqr;
///
/// let column = [Some(1.0), Some(2.0), None, Some(3.0), Some(4.0), Some(100.0)];
/// let detection = detect_outliers_iqr(&column, 1.5);
/// assert_eq!(detection.outliers, vec![100.0]);
/// ```
pub fn detect_outliers_iqr(values: &[Option<f64>], multiplier: f64) -> Detection {
    debug_assert!(multiplier > 0.0, "IQR multiplier must be positive");

    let clean = non_missing(values);
    let ordered = sorted(&clean);
    let (Some(q1), Some(q3)) = (quantile_sorted(&ordered, 0.25), quantile_sorted(&ordered, 0.75))
    else {
        return Detection::empty();
    };

    let iqr = q3 - q1;
    let lower_bound = q1 - multiplier * iqr;
    let upper_bound = q3 + multiplier * iqr;

    let outliers = clean
        .into_iter()
        .filter(|&x| x < lower_bound || x > upper_bound)
        .collect();

    // Infinite quartiles can give `inf - inf`; a NaN fence is no fence.
    Detection {
        outliers,
        lower_bound: Some(lower_bound).filter(|b| !b.is_nan()),
        upper_bound: Some(upper_bound).filter(|b| !b.is_nan()),
    }
}

/// IQR detector with a fixed multiplier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iqr {
    multiplier: f64,
}

impl Iqr {
    /// Create a detector with the given fence multiplier
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    /// Fence multiplier
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Default for Iqr {
    fn default() -> Self {
        Self::new(DEFAULT_IQR_MULTIPLIER)
    }
}

impl OutlierDetector for Iqr {
    fn name(&self) -> &'static str {
        "IQR"
    }

    fn detect(&self, values: &[Option<f64>]) -> Detection {
        detect_outliers_iqr(values, self.multiplier)
    }
}
