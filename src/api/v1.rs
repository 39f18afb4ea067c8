use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::time::Instant;

use crate::{
    api::{error::ApiError, response::ApiResponse},
    forecast::ForecastMetrics,
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/forecast/energy", post(generate_energy_forecast))
        .route("/forecast/evaluate", post(evaluate_forecast))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

/// POST /api/v1/forecast/energy - Forecast the next 24 hours
///
/// Body: raw readings as a JSON array, or wrapped as `{"readings": [...]}`.
/// Malformed or empty history degrades to a synthetic forecast; only a
/// body that is not JSON at all is rejected (by the extractor, as 400).
pub async fn generate_energy_forecast(
    State(st): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let started = Instant::now();
    let readings = readings_payload(&body);
    let input_count = readings.as_array().map_or(0, Vec::len);

    let forecast = st.engine.generate_forecast(readings);

    let response = ApiResponse::success(forecast)
        .with_input_count(input_count)
        .with_duration(started.elapsed().as_millis() as u64);
    (StatusCode::OK, Json(response))
}

/// Evaluation request: observed vs previously predicted hourly wattages.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub actual_watts: Vec<f64>,
    pub predicted_watts: Vec<f64>,
}

/// POST /api/v1/forecast/evaluate - Grade a past forecast
pub async fn evaluate_forecast(
    State(_st): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<ApiResponse<ForecastMetrics>>, ApiError> {
    let metrics = ForecastMetrics::calculate(&req.actual_watts, &req.predicted_watts)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(Json(ApiResponse::success(metrics)))
}

/// Accept both a bare readings array and the wrapped object form.
fn readings_payload(body: &Value) -> &Value {
    body.get("readings").unwrap_or(body)
}
