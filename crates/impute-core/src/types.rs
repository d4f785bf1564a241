//! Column metadata, handling strategies and the analysis result

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of outlier values carried in an [`OutlierAnalysis`]
pub const MAX_REPORTED_OUTLIERS: usize = 10;

/// Declared data type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Whole numbers
    Integer,
    /// Real numbers
    Float,
    /// Labels drawn from a finite set
    Categorical,
    /// Anything else (text, dates, flags, ...)
    Other,
}

impl DataType {
    /// Whether outlier detection is defined for this type
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Float)
    }

    /// Lowercase name as used in metadata files
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::Categorical => "categorical",
            DataType::Other => "other",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" => Ok(DataType::Integer),
            "float" => Ok(DataType::Float),
            "categorical" => Ok(DataType::Categorical),
            "other" => Ok(DataType::Other),
            _ => Err(Error::UnknownDataType(s.to_string())),
        }
    }
}

/// Metadata describing a single column
///
/// Supplied by whoever inferred the schema; business bounds are the valid
/// range the domain imposes, independent of the observed distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Declared type of the column
    pub data_type: DataType,
    /// Column is a unique identifier
    #[serde(default)]
    pub unique_flag: bool,
    /// Declared business minimum
    #[serde(default)]
    pub min_value: Option<f64>,
    /// Declared business maximum
    #[serde(default)]
    pub max_value: Option<f64>,
}

impl ColumnMetadata {
    /// Metadata for a non-unique column without business bounds
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            unique_flag: false,
            min_value: None,
            max_value: None,
        }
    }

    /// Mark the column as a unique identifier
    pub fn unique(mut self) -> Self {
        self.unique_flag = true;
        self
    }

    /// Declare a business minimum
    pub fn with_min(mut self, min_value: f64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    /// Declare a business maximum
    pub fn with_max(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    /// Declare both business bounds
    pub fn with_bounds(self, min_value: f64, max_value: f64) -> Self {
        self.with_min(min_value).with_max(max_value)
    }

    /// Whether either business bound is declared
    pub fn has_business_bounds(&self) -> bool {
        self.min_value.is_some() || self.max_value.is_some()
    }

    /// Parse metadata from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// How detected outliers should be treated before imputation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlierHandling {
    /// Keep values untouched
    LeaveAsIs,
    /// Clip values into the valid range
    CapToBounds,
    /// Replace outliers with missing values so imputation fills them
    ConvertToMissing,
}

impl OutlierHandling {
    /// Snake-case name of the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            OutlierHandling::LeaveAsIs => "leave_as_is",
            OutlierHandling::CapToBounds => "cap_to_bounds",
            OutlierHandling::ConvertToMissing => "convert_to_missing",
        }
    }
}

impl fmt::Display for OutlierHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of analysing one column for outliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierAnalysis {
    /// Number of outliers in the full column
    pub outlier_count: usize,
    /// Outliers as a fraction of non-missing values, in [0, 1]
    pub outlier_percentage: f64,
    /// Lower fence, if one could be computed
    pub lower_bound: Option<f64>,
    /// Upper fence, if one could be computed
    pub upper_bound: Option<f64>,
    /// First outliers in column order, at most [`MAX_REPORTED_OUTLIERS`]
    pub outlier_values: Vec<f64>,
    /// Recommended handling
    pub handling_strategy: OutlierHandling,
    /// Human-readable reason for the recommendation
    pub rationale: String,
}

impl OutlierAnalysis {
    /// Result for a column where detection was not run or found nothing
    pub fn clean(rationale: impl Into<String>) -> Self {
        Self {
            outlier_count: 0,
            outlier_percentage: 0.0,
            lower_bound: None,
            upper_bound: None,
            outlier_values: Vec::new(),
            handling_strategy: OutlierHandling::LeaveAsIs,
            rationale: rationale.into(),
        }
    }

    /// Whether any outliers were found
    pub fn has_outliers(&self) -> bool {
        self.outlier_count > 0
    }

    /// Whether the reported sample is shorter than the real outlier set
    pub fn is_sample_truncated(&self) -> bool {
        self.outlier_values.len() < self.outlier_count
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for OutlierAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} outliers ({:.1}%) -> {}: {}",
            self.outlier_count,
            self.outlier_percentage * 100.0,
            self.handling_strategy,
            self.rationale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_parsing() {
        assert_eq!("integer".parse::<DataType>().unwrap(), DataType::Integer);
        assert_eq!("Float".parse::<DataType>().unwrap(), DataType::Float);
        assert_eq!(" categorical ".parse::<DataType>().unwrap(), DataType::Categorical);
        assert_eq!("OTHER".parse::<DataType>().unwrap(), DataType::Other);

        let err = "datetime".parse::<DataType>().unwrap_err();
        assert!(matches!(err, Error::UnknownDataType(ref name) if name == "datetime"));
    }

    #[test]
    fn test_data_type_is_numeric() {
        assert!(DataType::Integer.is_numeric());
        assert!(DataType::Float.is_numeric());
        assert!(!DataType::Categorical.is_numeric());
        assert!(!DataType::Other.is_numeric());
    }

    #[test]
    fn test_metadata_builders() {
        let meta = ColumnMetadata::new(DataType::Float);
        assert!(!meta.unique_flag);
        assert!(!meta.has_business_bounds());

        let meta = ColumnMetadata::new(DataType::Integer).unique().with_bounds(0.0, 100.0);
        assert!(meta.unique_flag);
        assert_eq!(meta.min_value, Some(0.0));
        assert_eq!(meta.max_value, Some(100.0));

        // A zero bound is still a declared bound
        assert!(ColumnMetadata::new(DataType::Float).with_max(0.0).has_business_bounds());
    }

    #[test]
    fn test_metadata_from_json() {
        let meta = ColumnMetadata::from_json(r#"{"data_type": "integer", "min_value": 0}"#).unwrap();
        assert_eq!(meta.data_type, DataType::Integer);
        assert!(!meta.unique_flag);
        assert_eq!(meta.min_value, Some(0.0));
        assert_eq!(meta.max_value, None);

        assert!(ColumnMetadata::from_json(r#"{"data_type": "timestamp"}"#).is_err());
    }

    #[test]
    fn test_handling_names() {
        assert_eq!(OutlierHandling::LeaveAsIs.to_string(), "leave_as_is");
        assert_eq!(OutlierHandling::CapToBounds.to_string(), "cap_to_bounds");
        assert_eq!(OutlierHandling::ConvertToMissing.to_string(), "convert_to_missing");
        assert_eq!(
            serde_json::to_string(&OutlierHandling::ConvertToMissing).unwrap(),
            "\"convert_to_missing\""
        );
    }

    #[test]
    fn test_clean_analysis() {
        let analysis = OutlierAnalysis::clean("No outliers detected");
        assert!(!analysis.has_outliers());
        assert!(!analysis.is_sample_truncated());
        assert_eq!(analysis.handling_strategy, OutlierHandling::LeaveAsIs);
        assert_eq!(analysis.outlier_percentage, 0.0);
        assert_eq!(analysis.to_string(), "0 outliers (0.0%) -> leave_as_is: No outliers detected");
    }

    #[test]
    fn test_analysis_json() {
        let analysis = OutlierAnalysis {
            outlier_count: 12,
            outlier_percentage: 0.06,
            lower_bound: Some(-1.0),
            upper_bound: None,
            outlier_values: vec![100.0; MAX_REPORTED_OUTLIERS],
            handling_strategy: OutlierHandling::CapToBounds,
            rationale: "capped".to_string(),
        };
        assert!(analysis.is_sample_truncated());

        let json = analysis.to_json().unwrap();
        assert!(json.contains("\"handling_strategy\":\"cap_to_bounds\""));
        assert!(json.contains("\"upper_bound\":null"));

        let back: OutlierAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }
}
