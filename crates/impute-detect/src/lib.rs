//! Outlier detectors for columns with missing values
//!
//! Two classical tests are provided:
//!
//! - [`detect_outliers_iqr`]: Tukey fences around the interquartile range.
//!   Robust to the outliers it is looking for; used by the analysis pipeline.
//! - [`detect_outliers_zscore`]: distance from the mean in population
//!   standard deviations. Sensitive to heavy contamination.
//!
//! Both drop missing entries (`None` or `NaN`) before computing anything and
//! return outliers in column order. The [`OutlierDetector`] trait lets callers
//! pick a method at runtime.
//!
//! # Example
//!
//! ```rust
//! use impute_detect::{Iqr, OutlierDetector, ZScore};
//!
//! let column: Vec<Option<f64>> = vec![Some(10.0), Some(11.0), Some(9.5), None, Some(10.5), Some(42.0)];
//!
//! let detectors: Vec<Box<dyn OutlierDetector>> = vec![Box::new(Iqr::default()), Box::new(ZScore::new(1.5))];
//! for detector in &detectors {
//!     let detection = detector.detect(&column);
//!     println!("{}: {:?}", detector.name(), detection.outliers);
//! }
//! ```

pub mod iqr;
pub mod traits;
pub mod zscore;

pub use iqr::{detect_outliers_iqr, Iqr};
pub use traits::{Detection, OutlierDetector};
pub use zscore::{detect_outliers_zscore, ZScore, DEFAULT_ZSCORE_THRESHOLD};
