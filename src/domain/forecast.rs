use chrono::{DateTime, FixedOffset};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::forecast::stats::round_dp;

/// One forecast hour-slot.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPrediction {
    /// Absolute start of the hour-slot
    pub time: DateTime<FixedOffset>,
    /// Hour of day (0-23)
    pub hour: u32,
    /// Day of week (0 = Sunday)
    pub day_of_week: u32,
    /// Expected power draw in watts, rounded to 1 decimal
    pub predicted_watts: f64,
    /// Heuristic support score in [0, 1]
    pub confidence: f64,
}

/// Daily roll-up of the 24 hourly predictions.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Total predicted energy (kWh), 2 decimals
    pub total_kwh: f64,
    /// Highest hourly prediction, rounded to whole watts
    pub peak_watts: u32,
    /// Mean slot confidence, 2 decimals
    pub average_confidence: f64,
}

impl DailySummary {
    /// Roll hourly predictions into a daily summary.
    ///
    /// Each slot is one hour, so summed watts are watt-hours. An empty
    /// slice falls back to fixed typical-household values instead of
    /// failing; the pipeline upstream guarantees 24 slots, so this
    /// branch only covers a broken caller.
    pub fn from_predictions(predictions: &[HourlyPrediction]) -> Self {
        if predictions.is_empty() {
            return Self::fallback();
        }

        let total_watt_hours: f64 = predictions.iter().map(|p| p.predicted_watts).sum();
        let peak_watts = predictions
            .iter()
            .map(|p| OrderedFloat(p.predicted_watts))
            .max()
            .map(OrderedFloat::into_inner)
            .unwrap_or(0.0);
        let average_confidence =
            predictions.iter().map(|p| p.confidence).sum::<f64>() / predictions.len() as f64;

        Self {
            total_kwh: round_dp(total_watt_hours / 1000.0, 2),
            peak_watts: peak_watts.round() as u32,
            average_confidence: round_dp(average_confidence, 2),
        }
    }

    /// Typical-household placeholder summary.
    pub fn fallback() -> Self {
        Self {
            total_kwh: 19.2,
            peak_watts: 1800,
            average_confidence: 0.6,
        }
    }
}

/// Full 24 h energy forecast as returned to the dashboard.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyForecast {
    /// Exactly one prediction per future hour-slot
    pub hourly_predictions: Vec<HourlyPrediction>,
    pub daily_summary: DailySummary,
    /// True iff the supplied history was dense enough to drive the
    /// pattern matcher (more than 5 normalized readings)
    pub is_based_on_real_data: bool,
    /// Raw input record count, before normalization
    pub data_points: usize,
    /// Timestamp the forecast was generated
    pub generated_at: DateTime<FixedOffset>,
}
