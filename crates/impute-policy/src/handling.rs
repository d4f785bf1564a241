//! Applying a handling strategy to a column
//!
//! Produces the column the imputation step receives. Missing entries stay
//! missing whatever the strategy.

use impute_core::numeric::is_present;
use impute_core::{ColumnMetadata, OutlierAnalysis, OutlierHandling};

/// Range values are clipped into when capping
///
/// The statistical fences, tightened by any declared business bounds. `None`
/// on a side means that side is unbounded.
pub fn capping_range(metadata: &ColumnMetadata, analysis: &OutlierAnalysis) -> (Option<f64>, Option<f64>) {
    let lower = tighter(analysis.lower_bound, metadata.min_value, f64::max);
    let upper = tighter(analysis.upper_bound, metadata.max_value, f64::min);
    (lower, upper)
}

fn tighter(a: Option<f64>, b: Option<f64>, pick: fn(f64, f64) -> f64) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (a, b) => a.or(b),
    }
}

/// Apply the strategy recorded in `analysis` to `values`
///
/// - leave as is: values are returned unchanged
/// - cap to bounds: present values are clipped into [`capping_range`]
/// - convert to missing: values outside the statistical fences become `None`
pub fn apply_outlier_handling(
    values: &[Option<f64>],
    metadata: &ColumnMetadata,
    analysis: &OutlierAnalysis,
) -> Vec<Option<f64>> {
    match analysis.handling_strategy {
        OutlierHandling::LeaveAsIs => values.to_vec(),
        OutlierHandling::CapToBounds => {
            let (lower, upper) = capping_range(metadata, analysis);
            values
                .iter()
                .map(|&v| v.filter(|_| is_present(v)).map(|x| cap(x, lower, upper)))
                .collect()
        }
        OutlierHandling::ConvertToMissing => values
            .iter()
            .map(|&v| {
                v.filter(|&x| {
                    !x.is_nan()
                        && !analysis.lower_bound.is_some_and(|lower| x < lower)
                        && !analysis.upper_bound.is_some_and(|upper| x > upper)
                })
            })
            .collect(),
    }
}

// Not f64::clamp: business bounds may cross the fences and clamp panics on
// an inverted range.
fn cap(value: f64, lower: Option<f64>, upper: Option<f64>) -> f64 {
    match (lower, upper) {
        (Some(lower), _) if value < lower => lower,
        (_, Some(upper)) if value > upper => upper,
        _ => value,
    }
}
