//! Error types for outlier analysis
//!
//! Analysis itself never fails; errors only surface when configuration or
//! column metadata is built from untrusted input.

use thiserror::Error;

/// Core error type for outlier analysis
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a constructor or validator
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Data type name outside the supported set
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    /// Configuration or metadata could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check that an IQR multiplier is usable as a fence width
    pub fn check_multiplier(multiplier: f64) -> Result<()> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "IQR multiplier {multiplier} must be finite and positive"
            )));
        }
        Ok(())
    }

    /// Check that a proportion lies strictly inside (0, 1)
    pub fn check_proportion(name: &str, value: f64) -> Result<()> {
        if !(value > 0.0 && value < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "{name} {value} must be in (0, 1)"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("threshold must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: threshold must be positive");

        let err = Error::UnknownDataType("datetime".to_string());
        assert_eq!(err.to_string(), "Unknown data type: datetime");
    }

    #[test]
    fn test_check_multiplier() {
        assert!(Error::check_multiplier(1.5).is_ok());
        assert!(Error::check_multiplier(3.0).is_ok());
        assert!(Error::check_multiplier(0.0).is_err());
        assert!(Error::check_multiplier(-1.0).is_err());
        assert!(Error::check_multiplier(f64::NAN).is_err());
        assert!(Error::check_multiplier(f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_proportion() {
        assert!(Error::check_proportion("outlier threshold", 0.05).is_ok());
        assert!(Error::check_proportion("outlier threshold", 0.0).is_err());
        assert!(Error::check_proportion("outlier threshold", 1.0).is_err());
        assert!(Error::check_proportion("outlier threshold", f64::NAN).is_err());

        let err = Error::check_proportion("outlier threshold", 1.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter: outlier threshold 1.5 must be in (0, 1)"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<f64>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
