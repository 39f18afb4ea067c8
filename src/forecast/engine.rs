//! Forecast assembly: 24 hour-slots plus the daily roll-up.

use chrono::{DateTime, Datelike, Duration, FixedOffset, Local, Timelike};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use tracing::debug;

use crate::domain::{DailySummary, EnergyForecast, HourlyPrediction};

use super::{confidence, filter, normalize, predictor};

/// Number of future hour-slots per forecast.
pub const FORECAST_HORIZON_HOURS: usize = 24;

/// History batches at or below this size are too sparse to call the
/// forecast data-backed. Matches the outlier filter's bypass threshold.
pub const SPARSE_HISTORY_LIMIT: usize = filter::SMALL_SAMPLE_LIMIT;

/// Stateless forecasting engine.
///
/// Every invocation runs the full pipeline over a snapshot of caller
/// data: normalize -> filter -> predict/score per slot -> summarize.
/// Nothing is cached or shared, so concurrent callers never interfere.
pub struct ForecastEngine {
    random_seed: Option<u64>,
}

impl ForecastEngine {
    /// Create an engine. A seed makes the banded-default jitter
    /// reproducible; `None` draws from entropy.
    pub fn new(random_seed: Option<u64>) -> Self {
        Self { random_seed }
    }

    fn rng(&self) -> StdRng {
        match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Forecast the next 24 hours from a raw readings payload.
    ///
    /// Never fails: malformed or empty history degrades to banded
    /// synthetic output with `is_based_on_real_data = false`.
    pub fn generate_forecast(&self, readings: &Value) -> EnergyForecast {
        self.generate_forecast_at(readings, Local::now().fixed_offset())
    }

    /// Same as [`generate_forecast`] with an explicit clock, for callers
    /// that need reproducible slot boundaries.
    pub fn generate_forecast_at(
        &self,
        readings: &Value,
        now: DateTime<FixedOffset>,
    ) -> EnergyForecast {
        let data_points = readings.as_array().map_or(0, Vec::len);
        let normalized = normalize::normalize_payload(readings, now);
        let is_based_on_real_data = normalized.len() > SPARSE_HISTORY_LIMIT;
        let history = filter::filter_outliers(&normalized);

        debug!(
            data_points,
            kept = history.len(),
            is_based_on_real_data,
            "generating 24h energy forecast"
        );

        let mut rng = self.rng();
        let current_hour = now.hour();
        let current_day = now.weekday().num_days_from_sunday();

        let hourly_predictions: Vec<HourlyPrediction> = (0..FORECAST_HORIZON_HOURS)
            .map(|i| {
                let offset = i as u32;
                let hour = (current_hour + offset) % 24;
                let day_of_week = (current_day + (current_hour + offset) / 24) % 7;

                HourlyPrediction {
                    time: now + Duration::hours(i as i64),
                    hour,
                    day_of_week,
                    predicted_watts: predictor::predict_watts(&history, hour, day_of_week, &mut rng),
                    confidence: confidence::confidence_for(&history, hour, day_of_week),
                }
            })
            .collect();

        let daily_summary = DailySummary::from_predictions(&hourly_predictions);

        EnergyForecast {
            hourly_predictions,
            daily_summary,
            is_based_on_real_data,
            data_points,
            generated_at: now,
        }
    }
}
