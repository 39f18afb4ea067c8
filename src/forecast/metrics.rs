//! Forecast evaluation against observed readings.
//!
//! Once the day's actual readings are in, a completed forecast can be
//! graded so the dashboard can show how trustworthy recent forecasts
//! have been.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::EnergyForecast;

/// Forecast accuracy metrics over one evaluation window.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMetrics {
    /// Mean absolute error (watts)
    pub mae_watts: f64,
    /// Root mean square error (watts)
    pub rmse_watts: f64,
    /// Mean absolute percentage error (%)
    pub mape_percent: f64,
    /// Coefficient of determination
    pub r2: f64,
    /// Number of samples evaluated
    pub sample_count: usize,
}

impl ForecastMetrics {
    /// Calculate metrics from actual and predicted wattages.
    pub fn calculate(actual: &[f64], predicted: &[f64]) -> Result<Self, MetricsError> {
        if actual.len() != predicted.len() {
            return Err(MetricsError::DimensionMismatch {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }
        if actual.is_empty() {
            return Err(MetricsError::EmptyData);
        }

        let n = actual.len() as f64;
        let errors: Vec<f64> = actual.iter().zip(predicted).map(|(a, p)| a - p).collect();

        let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
        let mse = errors.iter().map(|e| e * e).sum::<f64>() / n;

        // skip near-zero actuals so MAPE stays finite
        let percentage_errors: Vec<f64> = actual
            .iter()
            .zip(&errors)
            .filter(|(a, _)| a.abs() > 1e-6)
            .map(|(a, e)| e.abs() / a.abs() * 100.0)
            .collect();
        let mape = if percentage_errors.is_empty() {
            0.0
        } else {
            percentage_errors.iter().sum::<f64>() / percentage_errors.len() as f64
        };

        let mean_actual = actual.iter().sum::<f64>() / n;
        let total_variance: f64 = actual.iter().map(|a| (a - mean_actual).powi(2)).sum();
        let residual_variance: f64 = errors.iter().map(|e| e * e).sum();
        let r2 = if total_variance > 1e-10 {
            1.0 - residual_variance / total_variance
        } else {
            0.0
        };

        Ok(Self {
            mae_watts: mae,
            rmse_watts: mse.sqrt(),
            mape_percent: mape,
            r2,
            sample_count: actual.len(),
        })
    }

    /// Grade a forecast against the observed hourly wattages, slot by slot.
    pub fn evaluate(
        forecast: &EnergyForecast,
        observed_watts: &[f64],
    ) -> Result<Self, MetricsError> {
        let predicted: Vec<f64> = forecast
            .hourly_predictions
            .iter()
            .map(|p| p.predicted_watts)
            .collect();
        Self::calculate(observed_watts, &predicted)
    }

    /// Classify forecast quality from MAPE.
    pub fn quality(&self) -> ForecastQuality {
        if self.mape_percent < 5.0 {
            ForecastQuality::Excellent
        } else if self.mape_percent < 10.0 {
            ForecastQuality::Good
        } else if self.mape_percent < 20.0 {
            ForecastQuality::Fair
        } else {
            ForecastQuality::Poor
        }
    }
}

impl fmt::Display for ForecastMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MAE={:.1}W, RMSE={:.1}W, MAPE={:.2}%, R²={:.3}, quality={:?}",
            self.mae_watts,
            self.rmse_watts,
            self.mape_percent,
            self.r2,
            self.quality()
        )
    }
}

/// Forecast quality classification.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastQuality {
    Excellent, // MAPE < 5%
    Good,      // MAPE 5-10%
    Fair,      // MAPE 10-20%
    Poor,      // MAPE >= 20%
}

/// Forecast evaluation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MetricsError {
    #[error("dimension mismatch: actual={actual}, predicted={predicted}")]
    DimensionMismatch { actual: usize, predicted: usize },

    #[error("empty data provided")]
    EmptyData,
}
