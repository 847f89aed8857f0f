//! Client for the remote prediction model.
//!
//! POSTs the full input set to `{base_url}/predict` and expects a JSON body
//! shaped exactly like [`PredictionResult`]. Failures are returned to the
//! orchestrator, which falls back to the local engine — they never reach the
//! API caller.

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::ModelConfig;
use crate::models::prediction::{PredictionResult, SystemConfig};
use crate::models::weather::WeatherSnapshot;

/// Wire format of the model's `/predict` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRequest {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub system_capacity: f64,
    pub tilt_angle: f64,
    pub azimuth_angle: f64,
    pub panel_efficiency: f64,
    pub weather: ModelWeather,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelWeather {
    pub temperature: f64,
    pub humidity: f64,
    pub solar_irradiance: f64,
    pub cloud_cover: f64,
    pub wind_speed: f64,
    pub pressure: f64,
}

impl ModelRequest {
    pub fn new(
        system: &SystemConfig,
        latitude: f64,
        longitude: f64,
        weather: &WeatherSnapshot,
    ) -> Self {
        Self {
            city: system.city.clone(),
            latitude,
            longitude,
            system_capacity: system.capacity_kw,
            tilt_angle: system.tilt_deg,
            azimuth_angle: system.azimuth_deg,
            panel_efficiency: system.panel_efficiency_percent,
            weather: ModelWeather {
                temperature: weather.temperature_c,
                humidity: weather.humidity_percent,
                solar_irradiance: weather.irradiance,
                cloud_cover: weather.cloud_cover_percent,
                wind_speed: weather.wind_speed,
                pressure: weather.pressure_hpa.unwrap_or(1013.0),
            },
        }
    }
}

pub struct ModelClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ModelClient {
    pub fn new(config: &ModelConfig) -> Self {
        Self {
            http: Client::builder()
                .timeout(config.timeout)
                .build()
                .expect("reqwest client"),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn predict(&self, request: &ModelRequest) -> Result<PredictionResult, reqwest::Error> {
        let url = format!("{}/predict", self.base_url);
        debug!("calling prediction model: {url}");

        self.http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
