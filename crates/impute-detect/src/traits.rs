//! Common interface for outlier detectors

/// Outliers found in a column together with the fences used
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Detection {
    /// Outlier values in column order
    pub outliers: Vec<f64>,
    /// Lower fence, `None` when it could not be computed
    pub lower_bound: Option<f64>,
    /// Upper fence, `None` when it could not be computed
    pub upper_bound: Option<f64>,
}

impl Detection {
    /// Detection with no outliers and no fences (empty input)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of outliers found
    pub fn count(&self) -> usize {
        self.outliers.len()
    }

    /// Whether a value falls strictly outside the fences
    ///
    /// Without fences nothing is an outlier.
    pub fn is_outside(&self, value: f64) -> bool {
        let below = self.lower_bound.is_some_and(|lower| value < lower);
        let above = self.upper_bound.is_some_and(|upper| value > upper);
        below || above
    }
}

/// A method for flagging outliers in a column with missing values
pub trait OutlierDetector {
    /// Name of the detection method
    fn name(&self) -> &'static str;

    /// Flag outliers among the present values of `values`
    fn detect(&self, values: &[Option<f64>]) -> Detection;
}
