//! Per-slot confidence scoring.
//!
//! Only exact (hour, day-of-week) matches count here; the predictor's
//! hour-only relaxation does not feed back into the score. The result is
//! always one of {0.6, 0.65, 0.7, 0.8, 0.9}.

use crate::domain::NormalizedReading;

use super::stats;

/// Score when a slot has no exact historical support and the prediction
/// rests on a relaxed or synthetic estimate.
pub const DEFAULT_CONFIDENCE: f64 = 0.6;

/// Score for slots backed by only one or two samples.
const SPARSE_CONFIDENCE: f64 = 0.65;

/// Confidence for a target slot.
///
/// Three or more samples let the coefficient of variation pick the band;
/// a zero mean is treated as CV 1.0 so an all-off appliance does not
/// divide by zero into spurious certainty.
pub fn confidence_for(history: &[NormalizedReading], hour: u32, day_of_week: u32) -> f64 {
    let matched: Vec<f64> = history
        .iter()
        .filter(|r| r.matches_pattern(hour, day_of_week))
        .map(|r| r.watts)
        .collect();

    match matched.len() {
        0 => DEFAULT_CONFIDENCE,
        1 | 2 => SPARSE_CONFIDENCE,
        _ => {
            let mean = stats::mean(&matched);
            let cv = if mean == 0.0 {
                1.0
            } else {
                stats::std_dev(&matched) / mean
            };
            confidence_from_cv(cv)
        }
    }
}

fn confidence_from_cv(cv: f64) -> f64 {
    if cv < 0.1 {
        0.9
    } else if cv < 0.2 {
        0.8
    } else if cv < 0.3 {
        0.7
    } else {
        DEFAULT_CONFIDENCE
    }
}
