//! Missing-value aware numeric helpers
//!
//! Columns are `&[Option<f64>]`. `None` marks a missing entry, and `NaN` is
//! treated as missing too since float buffers have no other way to say so.

/// Whether an entry carries a usable value
#[inline]
pub fn is_present(value: Option<f64>) -> bool {
    matches!(value, Some(v) if !v.is_nan())
}

/// Present values in column order
pub fn non_missing(values: &[Option<f64>]) -> Vec<f64> {
    values
        .iter()
        .filter_map(|&v| v.filter(|x| !x.is_nan()))
        .collect()
}

/// Number of present values
pub fn count_non_missing(values: &[Option<f64>]) -> usize {
    values.iter().filter(|&&v| is_present(v)).count()
}

/// Sort a copy of the data in ascending order
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Quantile of sorted data with linear interpolation between closest ranks
///
/// Position is `p * (n - 1)`; returns `None` for empty data.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    let last = n.checked_sub(1)?;
    if last == 0 {
        return sorted.first().copied();
    }

    let rank = p.clamp(0.0, 1.0) * last as f64;
    let lower_idx = rank.floor() as usize;
    let upper_idx = (lower_idx + 1).min(last);
    let fraction = rank - lower_idx as f64;

    let lower = sorted[lower_idx];
    let upper = sorted[upper_idx];
    // Exact ranks and equal neighbours skip interpolation, which is NaN on infinities
    if fraction == 0.0 || lower == upper {
        return Some(lower);
    }
    Some(lower + fraction * (upper - lower))
}

/// Arithmetic mean, `None` for empty data
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population standard deviation (divides by `n`), `None` for empty data
pub fn population_std_dev(data: &[f64]) -> Option<f64> {
    let mean = mean(data)?;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / data.len() as f64;
    Some(variance.sqrt())
}
