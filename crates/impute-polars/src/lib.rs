//! Polars integration for pre-imputation outlier analysis
//!
//! A single extension trait, [`OutlierAnalysisExt`], runs the outlier
//! pipeline on DataFrame columns and applies the recommended handling.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use impute_core::{AnalysisConfig, ColumnMetadata, DataType};
//! use impute_polars::OutlierAnalysisExt;
//!
//! let df = df!["age" => [Some(34.0), None, Some(29.0), Some(41.0), Some(390.0)]]?;
//! let meta = ColumnMetadata::new(DataType::Integer).with_bounds(0.0, 120.0);
//!
//! let report = df.outlier_report(&[("age", meta)], &AnalysisConfig::default())?;
//! println!("{report}");
//! ```

mod error;
mod methods;
mod traits;

pub use error::{Error, Result};
pub use traits::OutlierAnalysisExt;
