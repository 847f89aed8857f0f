use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::Error;
use crate::models::prediction::{LocalPredictRequest, PredictionResult, SystemConfig};
use crate::services::cities;
use crate::services::prediction_service::PredictionService;

/// Immutable per-process state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// POST /api/predict
/// Run the full forecast flow for a configured installation
///
/// Resolves the city to coordinates, fetches live weather (falling back to a
/// fixed snapshot on provider failure), calls the remote prediction model and
/// computes locally when the model is unavailable. Requests are not debounced
/// or deduplicated server-side; callers should disable their trigger control
/// while one is in flight.
#[utoipa::path(
    post,
    path = "/api/predict",
    request_body = SystemConfig,
    responses(
        (status = 200, description = "Forecast computed", body = PredictionResult),
        (status = 404, description = "City not in the coordinate catalog"),
        (status = 422, description = "Parameter out of range")
    )
)]
pub async fn predict(
    State(state): State<AppState>,
    Json(system): Json<SystemConfig>,
) -> Result<Json<PredictionResult>, Error> {
    let result = state.service.predict(&system).await?;
    Ok(Json(result))
}

/// POST /api/predict/local
/// Run the offline estimator from caller-supplied weather readings
///
/// Uses the simple city-table strategy; no network I/O. Unknown cities fall
/// back to the default base efficiency rather than failing.
#[utoipa::path(
    post,
    path = "/api/predict/local",
    request_body = LocalPredictRequest,
    responses(
        (status = 200, description = "Forecast computed", body = PredictionResult),
        (status = 422, description = "Parameter out of range")
    )
)]
pub async fn predict_local(
    State(state): State<AppState>,
    Json(request): Json<LocalPredictRequest>,
) -> Result<Json<PredictionResult>, Error> {
    let result = state.service.predict_local(&request.system, &request.weather)?;
    Ok(Json(result))
}

/// GET /api/cities
/// List cities supported by the coordinate catalog
#[utoipa::path(
    get,
    path = "/api/cities",
    responses(
        (status = 200, description = "Supported city names", body = Vec<String>)
    )
)]
pub async fn list_cities() -> impl IntoResponse {
    Json(cities::city_names())
}

/// GET /api/health
/// Service liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthStatus)
    )
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
