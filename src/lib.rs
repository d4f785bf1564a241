//! Outlier detection and handling recommendations ahead of imputation
//!
//! Umbrella crate over the workspace:
//!
//! - [`impute_core`]: column metadata, configuration and the per-column verdict
//! - [`impute_detect`]: IQR and z-score detectors
//! - [`impute_policy`]: the rule table, the analysis pipeline and strategy application
//! - `impute_polars` (feature `polars`): DataFrame extension trait
//!
//! # Example
//!
//! ```rust
//! use impute_outliers::prelude::*;
//!
//! let scores = vec![Some(12.0), Some(14.0), None, Some(13.0), Some(15.0), Some(11.0), Some(90.0)];
//! let meta = ColumnMetadata::new(DataType::Float);
//!
//! let analysis = analyze_outliers(&scores, &meta, &AnalysisConfig::default());
//! assert_eq!(analysis.outlier_values, vec![90.0]);
//!
//! let handled = apply_outlier_handling(&scores, &meta, &analysis);
//! assert_eq!(handled.len(), scores.len());
//! ```

pub use impute_core;
pub use impute_detect;
pub use impute_policy;

#[cfg(feature = "polars")]
pub use impute_polars;

pub use impute_core::{
    AnalysisConfig, ColumnMetadata, DataType, Error, OutlierAnalysis, OutlierHandling, Result,
};
pub use impute_detect::{detect_outliers_iqr, detect_outliers_zscore, Detection, OutlierDetector};
pub use impute_policy::{
    analyze_columns, analyze_outliers, apply_outlier_handling, suggest_outlier_handling, ColumnInput,
    OutlierStats, PolicyRule, Recommendation,
};

/// Commonly used items
pub mod prelude {
    pub use impute_core::{AnalysisConfig, ColumnMetadata, DataType, OutlierAnalysis, OutlierHandling};
    pub use impute_detect::{Iqr, OutlierDetector, ZScore};
    pub use impute_policy::{analyze_columns, analyze_outliers, apply_outlier_handling, ColumnInput};

    #[cfg(feature = "polars")]
    pub use impute_polars::OutlierAnalysisExt;
}
