use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, response::Html, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use sunsight::api_docs::ApiDoc;
use sunsight::config::Config;
use sunsight::controllers::prediction_controller::AppState;
use sunsight::routes::prediction_routes::api_routes;
use sunsight::services::model_client::ModelClient;
use sunsight::services::prediction_service::PredictionService;
use sunsight::services::weather_service::WeatherClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sunsight=info,tower_http=info")),
        )
        .init();

    // 1. Load configuration from the environment (explicit struct from here on)
    let config = Config::from_env();
    info!(
        "configuration loaded: model={} weather={}",
        config.model.base_url, config.weather.base_url
    );

    // 2. Wire up the HTTP clients and the prediction service
    let weather = WeatherClient::new(&config.weather);
    let model = ModelClient::new(&config.model);
    let state = AppState {
        service: Arc::new(PredictionService::new(weather, model)),
    };

    // 3. Start the Axum HTTP server
    let app = Router::new()
        .nest("/api", api_routes(state))
        .route(
            "/scalar",
            get(|| async { Html(Scalar::new(ApiDoc::openapi()).to_html()) }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("API server listening on http://{addr}");
    info!("Scalar UI: http://{addr}/scalar");

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
