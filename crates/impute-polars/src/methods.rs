//! DataFrame-backed outlier analysis

use crate::{Error, Result};
use impute_core::{AnalysisConfig, ColumnMetadata, OutlierAnalysis};
use impute_policy::{analyze_outliers, apply_outlier_handling};
use polars::prelude::*;

/// Read a numeric column as `Option<f64>` values, nulls as missing
pub(crate) fn column_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))?;

    match column.dtype() {
        DataType::Float64 => Ok(column.f64()?.into_iter().collect()),
        DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32
        | DataType::UInt16
        | DataType::UInt8 => {
            // Convert to f64 for computation
            let float_column = column.cast(&DataType::Float64)?;
            let values = float_column.f64()?.into_iter().collect();
            Ok(values)
        }
        dt => Err(Error::TypeMismatch {
            expected: "numeric".to_string(),
            got: format!("{:?}", dt),
        }),
    }
}

pub(crate) fn analyze_column_impl(
    df: &DataFrame,
    name: &str,
    metadata: &ColumnMetadata,
    config: &AnalysisConfig,
) -> Result<OutlierAnalysis> {
    // Non-numeric columns are never read, only checked for existence
    if !metadata.data_type.is_numeric() {
        df.column(name)
            .map_err(|_| Error::InvalidColumn(name.to_string()))?;
        return Ok(analyze_outliers(&[], metadata, config));
    }

    let values = column_values(df, name)?;
    Ok(analyze_outliers(&values, metadata, config))
}

pub(crate) fn outlier_report_impl(
    df: &DataFrame,
    columns: &[(&str, ColumnMetadata)],
    config: &AnalysisConfig,
) -> Result<DataFrame> {
    let mut names = Vec::with_capacity(columns.len());
    let mut counts = Vec::with_capacity(columns.len());
    let mut percentages = Vec::with_capacity(columns.len());
    let mut lower_bounds = Vec::with_capacity(columns.len());
    let mut upper_bounds = Vec::with_capacity(columns.len());
    let mut strategies = Vec::with_capacity(columns.len());
    let mut rationales = Vec::with_capacity(columns.len());

    for (name, metadata) in columns {
        let analysis = analyze_column_impl(df, name, metadata, config)?;
        names.push(*name);
        counts.push(analysis.outlier_count as u64);
        percentages.push(analysis.outlier_percentage);
        lower_bounds.push(analysis.lower_bound);
        upper_bounds.push(analysis.upper_bound);
        strategies.push(analysis.handling_strategy.as_str());
        rationales.push(analysis.rationale);
    }
    let rationales: Vec<&str> = rationales.iter().map(String::as_str).collect();

    let report = DataFrame::new(vec![
        Series::new("column".into(), names).into(),
        Series::new("outlier_count".into(), counts).into(),
        Series::new("outlier_percentage".into(), percentages).into(),
        Series::new("lower_bound".into(), lower_bounds).into(),
        Series::new("upper_bound".into(), upper_bounds).into(),
        Series::new("handling_strategy".into(), strategies).into(),
        Series::new("rationale".into(), rationales).into(),
    ])?;
    Ok(report)
}

pub(crate) fn handle_column_impl(
    df: &DataFrame,
    name: &str,
    metadata: &ColumnMetadata,
    analysis: &OutlierAnalysis,
) -> Result<Series> {
    let values = column_values(df, name)?;
    let handled = apply_outlier_handling(&values, metadata, analysis);
    Ok(Series::new(name.into(), handled))
}

pub(crate) fn handle_outliers_impl(
    df: &DataFrame,
    columns: &[(&str, ColumnMetadata)],
    config: &AnalysisConfig,
) -> Result<DataFrame> {
    let mut handled_df = df.clone();

    for (name, metadata) in columns {
        if !metadata.data_type.is_numeric() {
            continue;
        }
        let analysis = analyze_column_impl(df, name, metadata, config)?;
        let series = handle_column_impl(df, name, metadata, &analysis)?;
        handled_df.with_column(series)?;
    }

    Ok(handled_df)
}
