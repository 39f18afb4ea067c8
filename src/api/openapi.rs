#[cfg(feature = "swagger")]
use utoipa::OpenApi;

#[cfg(feature = "swagger")]
use crate::api::v1::EvaluateRequest;

#[cfg(feature = "swagger")]
use crate::domain::{DailySummary, EnergyForecast, HourlyPrediction, NormalizedReading};

#[cfg(feature = "swagger")]
use crate::forecast::{ForecastMetrics, ForecastQuality};

#[cfg(feature = "swagger")]
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            EnergyForecast,
            HourlyPrediction,
            DailySummary,
            NormalizedReading,
            ForecastMetrics,
            ForecastQuality,
            EvaluateRequest,
        )
    ),
    tags((name = "hef", description = "Home Energy Forecast API v1"))
)]
pub struct ApiDoc;
