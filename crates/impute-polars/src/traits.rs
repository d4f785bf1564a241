//! Extension trait for outlier analysis on Polars DataFrames

use crate::methods::{analyze_column_impl, handle_column_impl, handle_outliers_impl, outlier_report_impl};
use crate::Result;
use impute_core::{AnalysisConfig, ColumnMetadata, OutlierAnalysis};
use polars::prelude::*;

/// Outlier analysis and handling for DataFrame columns
pub trait OutlierAnalysisExt {
    /// Analyse one column
    ///
    /// # Arguments
    /// * `column` - Column name
    /// * `metadata` - Declared metadata for the column
    /// * `config` - Analysis configuration
    ///
    /// Integer and float columns are read as `f64` with nulls as missing.
    /// Columns with non-numeric metadata are not read.
    fn analyze_column_outliers(
        &self,
        column: &str,
        metadata: &ColumnMetadata,
        config: &AnalysisConfig,
    ) -> Result<OutlierAnalysis>;

    /// Analyse several columns into a report
    ///
    /// # Returns
    /// DataFrame with one row per column and the columns `column`,
    /// `outlier_count`, `outlier_percentage`, `lower_bound`, `upper_bound`,
    /// `handling_strategy` and `rationale`
    fn outlier_report(
        &self,
        columns: &[(&str, ColumnMetadata)],
        config: &AnalysisConfig,
    ) -> Result<DataFrame>;

    /// Apply the strategy in `analysis` to a numeric column
    ///
    /// # Returns
    /// `Float64` series with the column's name
    fn handle_column_outliers(
        &self,
        column: &str,
        metadata: &ColumnMetadata,
        analysis: &OutlierAnalysis,
    ) -> Result<Series>;

    /// Analyse and handle every numeric column listed, replacing it in a copy
    /// of the frame. Non-numeric columns are left untouched.
    fn handle_outliers(
        &self,
        columns: &[(&str, ColumnMetadata)],
        config: &AnalysisConfig,
    ) -> Result<DataFrame>;
}

impl OutlierAnalysisExt for DataFrame {
    fn analyze_column_outliers(
        &self,
        column: &str,
        metadata: &ColumnMetadata,
        config: &AnalysisConfig,
    ) -> Result<OutlierAnalysis> {
        analyze_column_impl(self, column, metadata, config)
    }

    fn outlier_report(
        &self,
        columns: &[(&str, ColumnMetadata)],
        config: &AnalysisConfig,
    ) -> Result<DataFrame> {
        outlier_report_impl(self, columns, config)
    }

    fn handle_column_outliers(
        &self,
        column: &str,
        metadata: &ColumnMetadata,
        analysis: &OutlierAnalysis,
    ) -> Result<Series> {
        handle_column_impl(self, column, metadata, analysis)
    }

    fn handle_outliers(
        &self,
        columns: &[(&str, ColumnMetadata)],
        config: &AnalysisConfig,
    ) -> Result<DataFrame> {
        handle_outliers_impl(self, columns, config)
    }
}
