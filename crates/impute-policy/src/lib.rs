//! Outlier handling recommendations ahead of imputation
//!
//! The pipeline per column is:
//!
//! 1. skip non-numeric columns
//! 2. detect outliers with IQR fences ([`impute_detect::detect_outliers_iqr`])
//! 3. pick a strategy with the ordered rule table in [`rules`]
//! 4. assemble an [`OutlierAnalysis`](impute_core::OutlierAnalysis)
//!
//! [`apply_outlier_handling`] then turns the verdict into the column handed to
//! imputation.
//!
//! # Example
//!
//! ```rust
//! use impute_core::{AnalysisConfig, ColumnMetadata, DataType, OutlierHandling};
//! use impute_policy::{analyze_outliers, apply_outlier_handling};
//!
//! let mut ages: Vec<Option<f64>> = (20..60).map(|a| Some(a as f64)).collect();
//! ages.push(Some(460.0)); // typo for 46
//!
//! let meta = ColumnMetadata::new(DataType::Integer).with_bounds(0.0, 120.0);
//! let analysis = analyze_outliers(&ages, &meta, &AnalysisConfig::default());
//! assert_eq!(analysis.handling_strategy, OutlierHandling::CapToBounds);
//!
//! let handled = apply_outlier_handling(&ages, &meta, &analysis);
//! assert!(handled.iter().flatten().all(|&age| age <= 120.0));
//! ```

pub mod analyze;
pub mod handling;
pub mod rules;

pub use analyze::{analyze_columns, analyze_outliers, ColumnInput};
pub use handling::{apply_outlier_handling, capping_range};
pub use rules::{
    format_percentage, rule_order, suggest_outlier_handling, OutlierStats, PolicyRule, Recommendation,
    HIGH_CONTAMINATION, MODERATE_CONTAMINATION,
};
