//! Descriptive statistics over recorded grades
//!
//! Every function returns `0.0` for an empty input instead of NaN.

/// Arithmetic mean
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of the ascending sort.
///
/// For an even count this is the average of the two middle values
/// (indices `n/2 - 1` and `n/2`).
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[middle]
    } else {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    }
}

/// Sample standard deviation (divides by `n - 1`).
///
/// A single value has no spread, so fewer than two values yield `0.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let avg = mean(values);
    let sum_squares: f64 = values.iter().map(|value| (value - avg).powi(2)).sum();
    (sum_squares / (values.len() - 1) as f64).sqrt()
}
