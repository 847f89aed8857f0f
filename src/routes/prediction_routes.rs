use axum::{
    Router,
    routing::{get, post},
};

use crate::controllers::prediction_controller::{
    AppState, health, list_cities, predict, predict_local,
};

/// Build the `/api/*` sub-router.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/predict/local", post(predict_local))
        .route("/cities", get(list_cities))
        .route("/health", get(health))
        .with_state(state)
}
