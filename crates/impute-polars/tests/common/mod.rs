//! Common test utilities for impute-polars tests

#![allow(dead_code)]

use polars::prelude::*;

/// Ages 20..60 with a single typo of 460
pub fn ages_df() -> DataFrame {
    let mut ages: Vec<Option<f64>> = (20..60).map(|a| Some(a as f64)).collect();
    ages.push(Some(460.0));
    DataFrame::new(vec![Series::new(PlSmallStr::from("age"), ages).into()]).unwrap()
}

/// 0..=18 plus two gross outliers, 2 of 21 values flagged
pub fn moderate_df() -> DataFrame {
    let mut values: Vec<f64> = (0..=18).map(f64::from).collect();
    values.extend([500.0, 600.0]);
    df!["score" => values].unwrap()
}

/// Extract a Float64 column as a plain vector
pub fn extract_f64(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name).unwrap().f64().unwrap().into_iter().collect()
}

/// Extract a single string cell
pub fn extract_str(df: &DataFrame, name: &str, row: usize) -> String {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .get(row)
        .unwrap()
        .to_string()
}
