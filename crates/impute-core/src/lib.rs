//! Core types for pre-imputation outlier analysis
//!
//! This crate holds the shared vocabulary of the workspace:
//!
//! - [`ColumnMetadata`] and [`DataType`]: what the schema says about a column
//! - [`AnalysisConfig`]: fence width and capping threshold for a run
//! - [`OutlierAnalysis`] and [`OutlierHandling`]: the per-column verdict
//! - [`numeric`]: missing-value aware helpers (cleaning, quantiles, moments)
//!
//! # Example
//!
//! ```rust
//! use impute_core::{AnalysisConfig, ColumnMetadata, DataType};
//!
//! let config = AnalysisConfig::new(1.5, 0.05).unwrap();
//! let meta = ColumnMetadata::new(DataType::Integer).with_bounds(0.0, 120.0);
//!
//! assert!(meta.data_type.is_numeric());
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod numeric;
pub mod types;

pub use config::{AnalysisConfig, DEFAULT_IQR_MULTIPLIER, DEFAULT_OUTLIER_THRESHOLD};
pub use error::{Error, Result};
pub use types::{ColumnMetadata, DataType, OutlierAnalysis, OutlierHandling, MAX_REPORTED_OUTLIERS};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
