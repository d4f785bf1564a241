//! Per-column outlier analysis

use crate::rules::{suggest_outlier_handling, OutlierStats};
use impute_core::numeric::count_non_missing;
use impute_core::{AnalysisConfig, ColumnMetadata, OutlierAnalysis, MAX_REPORTED_OUTLIERS};
use impute_detect::detect_outliers_iqr;
use tracing::{debug, instrument};

/// Analyse one column and recommend how to handle its outliers
///
/// Non-numeric columns are not inspected. Numeric columns go through the IQR
/// detector with `config.iqr_multiplier`; the outlier percentage is taken over
/// non-missing values (0 when there are none). Only the first
/// [`MAX_REPORTED_OUTLIERS`] outliers are kept in the result, while the count
/// and percentage cover all of them.
///
/// The configuration is assumed valid; see [`AnalysisConfig::validate`].
///
/// # Examples
///
/// ```rust
/// use impute_core::{AnalysisConfig, ColumnMetadata, DataType, OutlierHandling};
/// use impute_policy::analyze_outliers;
///
/// let column = [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)];
/// let meta = ColumnMetadata::new(DataType::Float);
/// let analysis = analyze_outliers(&column, &meta, &AnalysisConfig::default());
///
/// assert_eq!(analysis.outlier_count, 0);
/// assert_eq!(analysis.handling_strategy, OutlierHandling::LeaveAsIs);
/// ```
#[instrument(skip_all, fields(len = values.len(), data_type = %metadata.data_type))]
pub fn analyze_outliers(
    values: &[Option<f64>],
    metadata: &ColumnMetadata,
    config: &AnalysisConfig,
) -> OutlierAnalysis {
    if !metadata.data_type.is_numeric() {
        debug!("Skipping outlier detection for non-numeric column");
        return OutlierAnalysis::clean(format!(
            "Non-numeric data type ({}) - no outlier detection",
            metadata.data_type
        ));
    }

    let detection = detect_outliers_iqr(values, config.iqr_multiplier);
    let outlier_count = detection.count();
    let total_non_missing = count_non_missing(values);
    let outlier_percentage = if total_non_missing > 0 {
        outlier_count as f64 / total_non_missing as f64
    } else {
        0.0
    };
    debug!(
        outlier_count,
        total_non_missing,
        lower_bound = ?detection.lower_bound,
        upper_bound = ?detection.upper_bound,
        "IQR fences computed"
    );

    let stats = OutlierStats {
        count: outlier_count,
        percentage: outlier_percentage,
        lower_bound: detection.lower_bound,
        upper_bound: detection.upper_bound,
    };
    let recommendation = suggest_outlier_handling(&stats, metadata, config);
    debug!(rule = %recommendation.rule, strategy = %recommendation.strategy, "Handling selected");

    let mut outlier_values = detection.outliers;
    outlier_values.truncate(MAX_REPORTED_OUTLIERS);

    OutlierAnalysis {
        outlier_count,
        outlier_percentage,
        lower_bound: detection.lower_bound,
        upper_bound: detection.upper_bound,
        outlier_values,
        handling_strategy: recommendation.strategy,
        rationale: recommendation.rationale,
    }
}

/// A column to analyse in a batch
#[derive(Debug, Clone, Copy)]
pub struct ColumnInput<'a> {
    /// Column values, `None` for missing
    pub values: &'a [Option<f64>],
    /// Column metadata
    pub metadata: &'a ColumnMetadata,
}

impl<'a> ColumnInput<'a> {
    /// Pair a column with its metadata
    pub fn new(values: &'a [Option<f64>], metadata: &'a ColumnMetadata) -> Self {
        Self { values, metadata }
    }
}

/// Analyse many columns with one configuration
///
/// Results are in input order. With the `parallel` feature columns are
/// analysed on the rayon pool; each analysis is independent.
pub fn analyze_columns(columns: &[ColumnInput<'_>], config: &AnalysisConfig) -> Vec<OutlierAnalysis> {
    debug!("Analysing {} columns", columns.len());

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        columns
            .par_iter()
            .map(|column| analyze_outliers(column.values, column.metadata, config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        columns
            .iter()
            .map(|column| analyze_outliers(column.values, column.metadata, config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use impute_core::{DataType, OutlierHandling};

    fn column(data: &[f64]) -> Vec<Option<f64>> {
        data.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_clean_column() {
        let meta = ColumnMetadata::new(DataType::Float);
        let analysis = analyze_outliers(&column(&[1.0, 2.0, 3.0, 4.0, 5.0]), &meta, &AnalysisConfig::default());
        assert_eq!(analysis.outlier_count, 0);
        assert_eq!(analysis.outlier_percentage, 0.0);
        assert_eq!(analysis.handling_strategy, OutlierHandling::LeaveAsIs);
        assert_eq!(analysis.rationale, "No outliers detected");
        assert_relative_eq!(analysis.lower_bound.unwrap(), -1.0);
        assert_relative_eq!(analysis.upper_bound.unwrap(), 7.0);
    }

    #[test]
    fn test_non_numeric_skips_detection() {
        let values = column(&[1.0, 2.0, 1000.0]);
        for data_type in [DataType::Categorical, DataType::Other] {
            let meta = ColumnMetadata::new(data_type);
            let analysis = analyze_outliers(&values, &meta, &AnalysisConfig::default());
            assert_eq!(analysis.outlier_count, 0);
            assert_eq!(analysis.lower_bound, None);
            assert_eq!(analysis.upper_bound, None);
            assert!(analysis.outlier_values.is_empty());
            assert_eq!(analysis.handling_strategy, OutlierHandling::LeaveAsIs);
        }

        let meta = ColumnMetadata::new(DataType::Categorical);
        let analysis = analyze_outliers(&values, &meta, &AnalysisConfig::default());
        assert_eq!(analysis.rationale, "Non-numeric data type (categorical) - no outlier detection");
    }

    #[test]
    fn test_percentage_uses_non_missing_total() {
        // 19 present values, one outlier, plus missing entries
        let mut values: Vec<Option<f64>> = (1..=18).map(|i| Some(i as f64)).collect();
        values.push(Some(500.0));
        values.extend([None, None, Some(f64::NAN)]);

        let meta = ColumnMetadata::new(DataType::Integer);
        let analysis = analyze_outliers(&values, &meta, &AnalysisConfig::default());
        assert_eq!(analysis.outlier_count, 1);
        assert_relative_eq!(analysis.outlier_percentage, 1.0 / 19.0);
        assert_eq!(analysis.outlier_values, vec![500.0]);
        // 5.3% is above the 5% capping threshold but under 10%
        assert_eq!(analysis.handling_strategy, OutlierHandling::ConvertToMissing);
    }

    #[test]
    fn test_all_missing_column() {
        let meta = ColumnMetadata::new(DataType::Float);
        let analysis = analyze_outliers(&[None, None, Some(f64::NAN)], &meta, &AnalysisConfig::default());
        assert_eq!(analysis.outlier_count, 0);
        assert_eq!(analysis.outlier_percentage, 0.0);
        assert_eq!(analysis.lower_bound, None);
        assert_eq!(analysis.upper_bound, None);
        assert_eq!(analysis.handling_strategy, OutlierHandling::LeaveAsIs);
    }

    #[test]
    fn test_sample_is_truncated_but_counts_are_not() {
        // 500 inliers around 0 and 50 far outliers: 50 / 550 < 10%
        let mut data: Vec<f64> = (0..500).map(|i| (i % 10) as f64).collect();
        data.extend((0..50).map(|i| 1_000.0 + i as f64));
        let meta = ColumnMetadata::new(DataType::Float);
        let analysis = analyze_outliers(&column(&data), &meta, &AnalysisConfig::default());

        assert_eq!(analysis.outlier_count, 50);
        assert_eq!(analysis.outlier_values.len(), MAX_REPORTED_OUTLIERS);
        assert_eq!(analysis.outlier_values[0], 1_000.0);
        assert_eq!(analysis.outlier_values[9], 1_009.0);
        assert_relative_eq!(analysis.outlier_percentage, 50.0 / 550.0);
    }

    #[test]
    fn test_analyze_columns_keeps_order() {
        let ages = column(&[21.0, 35.0, 42.0, 38.0, 29.0]);
        let codes = column(&[1.0, 2.0, 3.0]);
        let age_meta = ColumnMetadata::new(DataType::Integer);
        let code_meta = ColumnMetadata::new(DataType::Categorical);

        let inputs = [ColumnInput::new(&ages, &age_meta), ColumnInput::new(&codes, &code_meta)];
        let results = analyze_columns(&inputs, &AnalysisConfig::default());

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].rationale, "No outliers detected");
        assert!(results[1].rationale.starts_with("Non-numeric data type (categorical)"));
    }
}
