use utoipa::OpenApi;

use crate::controllers::prediction_controller;
use crate::models::{prediction, weather};

#[derive(OpenApi)]
#[openapi(
    paths(
        prediction_controller::predict,
        prediction_controller::predict_local,
        prediction_controller::list_cities,
        prediction_controller::health
    ),
    components(
        schemas(
            prediction::SystemConfig,
            prediction::LocalPredictRequest,
            prediction::PredictionResult,
            prediction::HourlySample,
            prediction::Recommendation,
            prediction::RecommendationCategory,
            prediction::ImpactLevel,
            weather::WeatherSnapshot,
            prediction_controller::HealthStatus
        )
    ),
    tags(
        (name = "sunsight", description = "Solar Power Forecast API")
    )
)]
pub struct ApiDoc;
