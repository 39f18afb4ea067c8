//! Pattern-matching wattage prediction.
//!
//! Matching relaxes progressively: exact (hour, day-of-week) patterns
//! first, then any day at the same hour, then a banded time-of-day
//! default. The stage always produces a number.

use rand::Rng;

use crate::domain::NormalizedReading;

use super::stats::round_dp;
use super::synthetic;

/// Predict wattage for one (hour, day-of-week) slot, rounded to 1 decimal.
pub fn predict_watts<R: Rng>(
    history: &[NormalizedReading],
    hour: u32,
    day_of_week: u32,
    rng: &mut R,
) -> f64 {
    let exact: Vec<f64> = history
        .iter()
        .filter(|r| r.matches_pattern(hour, day_of_week))
        .map(|r| r.watts)
        .collect();

    let matched = if exact.is_empty() {
        history
            .iter()
            .filter(|r| r.matches_hour(hour))
            .map(|r| r.watts)
            .collect()
    } else {
        exact
    };

    if matched.is_empty() {
        return round_dp(synthetic::synthetic_watts(hour, rng), 1);
    }

    round_dp(weighted_average(&matched), 1)
}

/// Positional weighting over matches in order of appearance: entry `i`
/// of `n` weighs `n - i`, so the first match carries weight `n` and the
/// last carries 1. Dashboards consuming these numbers rely on this exact
/// scheme; do not reverse it.
fn weighted_average(values: &[f64]) -> f64 {
    let n = values.len();
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;

    for (i, value) in values.iter().enumerate() {
        let weight = (n - i) as f64;
        weighted_sum += value * weight;
        weight_total += weight;
    }

    weighted_sum / weight_total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::synthetic::TimeOfDayBand;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_weighted_average_exact_value() {
        // weights 3, 2, 1 -> (300 + 400 + 300) / 6
        let history = vec![
            NormalizedReading::new(14, 2, 100.0),
            NormalizedReading::new(14, 2, 200.0),
            NormalizedReading::new(14, 2, 300.0),
        ];

        let predicted = predict_watts(&history, 14, 2, &mut rng());
        assert_eq!(predicted, 116.7);
    }

    #[test]
    fn test_bias_toward_first_match() {
        // A recency-weighted reading of the contract would land above the
        // plain mean (200); the positional scheme lands below it.
        let history = vec![
            NormalizedReading::new(14, 2, 100.0),
            NormalizedReading::new(14, 2, 200.0),
            NormalizedReading::new(14, 2, 300.0),
        ];

        let predicted = predict_watts(&history, 14, 2, &mut rng());
        assert!(predicted < 200.0);
    }

    #[test]
    fn test_exact_match_preferred_over_hour_match() {
        let history = vec![
            NormalizedReading::new(14, 2, 1000.0),
            NormalizedReading::new(14, 5, 100.0),
        ];

        let predicted = predict_watts(&history, 14, 2, &mut rng());
        assert_eq!(predicted, 1000.0);
    }

    #[test]
    fn test_relaxes_to_hour_only() {
        // no Tuesday samples at 14:00, but other days have some
        let history = vec![
            NormalizedReading::new(14, 5, 600.0),
            NormalizedReading::new(14, 6, 800.0),
            NormalizedReading::new(9, 2, 5000.0),
        ];

        // weights 2, 1 -> (1200 + 800) / 3
        let predicted = predict_watts(&history, 14, 2, &mut rng());
        assert_eq!(predicted, 666.7);
    }

    #[test]
    fn test_falls_back_to_band_when_no_matches() {
        let history = vec![NormalizedReading::new(9, 2, 5000.0)];

        let predicted = predict_watts(&history, 19, 4, &mut rng());
        let (low, high) = TimeOfDayBand::for_hour(19).watts_range();
        assert!(predicted >= low && predicted <= high);
    }

    #[test]
    fn test_empty_history_always_produces_a_number() {
        let mut r = rng();
        for hour in 0..24 {
            let predicted = predict_watts(&[], hour, 3, &mut r);
            assert!(predicted > 0.0);
        }
    }

    #[test]
    fn test_single_match_returned_as_is() {
        let history = vec![NormalizedReading::new(6, 1, 1234.56)];

        let predicted = predict_watts(&history, 6, 1, &mut rng());
        assert_eq!(predicted, 1234.6);
    }
}
