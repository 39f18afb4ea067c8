//! Order-statistics helpers shared by the filter and confidence stages.

use itertools::Itertools;

/// Quantile by linear interpolation between order statistics.
///
/// `q` is a fraction in [0, 1]. The index `q * (n - 1)` selects between
/// two neighbouring sorted samples; a fractional index interpolates
/// proportionally, an exact landing uses that sample directly.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let sorted: Vec<f64> = values
        .iter()
        .copied()
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .collect();

    let index = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if lower == upper {
        return Some(sorted[lower]);
    }

    let weight = index - lower as f64;
    Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0.0 for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    (values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64).sqrt()
}

/// Round to `decimals` decimal places.
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_exact_landing() {
        // 5 samples: index 0.25 * 4 = 1.0 lands exactly on the 2nd sample
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile(&values, 0.25), Some(2.0));
        assert_eq!(quantile(&values, 0.5), Some(3.0));
        assert_eq!(quantile(&values, 0.75), Some(4.0));
    }

    #[test]
    fn test_quantile_interpolates() {
        // 4 samples: index 0.25 * 3 = 0.75, between 1.0 and 2.0
        let values = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.25), Some(1.75));
        assert_eq!(quantile(&values, 0.75), Some(3.25));
    }

    #[test]
    fn test_quantile_unsorted_input() {
        let values = vec![5.0, 1.0, 3.0, 2.0, 4.0];
        assert_eq!(quantile(&values, 0.5), Some(3.0));
    }

    #[test]
    fn test_quantile_extremes() {
        let values = vec![10.0, 20.0, 30.0];
        assert_eq!(quantile(&values, 0.0), Some(10.0));
        assert_eq!(quantile(&values, 1.0), Some(30.0));
    }

    #[test]
    fn test_quantile_single_sample() {
        assert_eq!(quantile(&[42.0], 0.25), Some(42.0));
        assert_eq!(quantile(&[42.0], 0.75), Some(42.0));
    }

    #[test]
    fn test_quantile_empty() {
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_population_std_dev() {
        // mean 600, variance (10000 + 0 + 10000) / 3
        let values = vec![500.0, 600.0, 700.0];
        let sd = std_dev(&values);
        assert!((sd - 81.6496).abs() < 1e-3);
    }

    #[test]
    fn test_std_dev_uniform_values() {
        assert_eq!(std_dev(&[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(116.6666, 1), 116.7);
        assert_eq!(round_dp(19.2349, 2), 19.23);
        assert_eq!(round_dp(0.625, 2), 0.63);
    }
}
