//! Interquartile-range outlier removal.
//!
//! A compressor kicking in or a meter glitch can leave single readings
//! far outside the household's normal envelope; those would dominate the
//! weighted averages downstream. Readings outside
//! [Q1 - 1.5 IQR, Q3 + 1.5 IQR] are dropped, preserving the order of the
//! survivors.

use crate::domain::NormalizedReading;

use super::stats;

/// At or below this many samples the quartiles are too unstable to
/// characterize outliers, so the batch passes through untouched.
pub const SMALL_SAMPLE_LIMIT: usize = 5;

/// Drop statistical outliers from a normalized batch.
///
/// Output length never exceeds input length and remaining elements keep
/// their relative order.
pub fn filter_outliers(readings: &[NormalizedReading]) -> Vec<NormalizedReading> {
    if readings.len() <= SMALL_SAMPLE_LIMIT {
        return readings.to_vec();
    }

    let watts: Vec<f64> = readings.iter().map(|r| r.watts).collect();
    let (Some(q1), Some(q3)) = (
        stats::quantile(&watts, 0.25),
        stats::quantile(&watts, 0.75),
    ) else {
        return readings.to_vec();
    };

    let iqr = q3 - q1;
    let low = q1 - 1.5 * iqr;
    let high = q3 + 1.5 * iqr;

    readings
        .iter()
        .filter(|r| r.watts >= low && r.watts <= high)
        .copied()
        .collect()
}
