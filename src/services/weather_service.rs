//! Live weather provider (Open-Meteo) with a fixed fallback snapshot.
//!
//! The fetch is total from the caller's point of view: any network error,
//! non-success status or malformed payload is logged and replaced by
//! [`WeatherSnapshot::fallback`], so the estimator always receives a usable
//! input.

use chrono::Timelike;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::WeatherConfig;
use crate::models::weather::{ForecastResponse, WeatherSnapshot};

pub struct WeatherClient {
    http: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            http: Client::builder()
                .timeout(config.timeout)
                .build()
                .expect("reqwest client"),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Current conditions plus the solar-radiation forecast value for the
    /// current local hour. Never fails.
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> WeatherSnapshot {
        match self.try_fetch(latitude, longitude).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("weather fetch failed ({e}), using fallback snapshot");
                WeatherSnapshot::fallback()
            }
        }
    }

    async fn try_fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot, reqwest::Error> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current=temperature_2m,relative_humidity_2m,surface_pressure,wind_speed_10m,cloud_cover&hourly=solar_radiation_instant&timezone=Asia%2FKolkata&forecast_days=1",
            self.base_url, latitude, longitude
        );
        debug!("fetching weather: {url}");

        let response: ForecastResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let current_hour = chrono::Local::now().hour() as usize;
        let irradiance = response
            .hourly
            .solar_radiation_instant
            .get(current_hour)
            .copied()
            .unwrap_or(0.0);

        Ok(WeatherSnapshot {
            temperature_c: response.current.temperature_2m.unwrap_or(28.0),
            humidity_percent: response.current.relative_humidity_2m.unwrap_or(65.0),
            cloud_cover_percent: response.current.cloud_cover.unwrap_or(20.0),
            wind_speed: response.current.wind_speed_10m.unwrap_or(5.0),
            irradiance,
            pressure_hpa: response.current.surface_pressure,
        })
    }
}
