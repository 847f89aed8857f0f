//! Orchestrates one forecast request: resolve the city, fetch weather, try
//! the remote model, fall back to the local engine.
//!
//! The two awaits run sequentially — weather first, then the model — with no
//! retries and no parallelism. A failed model call falls back immediately to
//! local computation; only an unknown city or invalid parameters surface as
//! errors.

use chrono::Datelike;
use tracing::{info, warn};

use crate::error::Error;
use crate::models::prediction::{PredictionResult, SystemConfig};
use crate::models::weather::WeatherSnapshot;
use crate::services::cities;
use crate::services::estimator::{self, Strategy};
use crate::services::model_client::{ModelClient, ModelRequest};
use crate::services::weather_service::WeatherClient;

pub struct PredictionService {
    weather: WeatherClient,
    model: ModelClient,
}

impl PredictionService {
    pub fn new(weather: WeatherClient, model: ModelClient) -> Self {
        Self { weather, model }
    }

    /// Full prediction flow with live weather.
    ///
    /// The city must be in the coordinate catalog — weather is fetched by
    /// coordinate, so an unknown city is a hard error here rather than a
    /// silent default.
    pub async fn predict(&self, system: &SystemConfig) -> Result<PredictionResult, Error> {
        system.validate()?;
        let (latitude, longitude) = cities::coordinates(&system.city)
            .ok_or_else(|| Error::UnknownCity(system.city.clone()))?;

        let weather = self.weather.fetch(latitude, longitude).await;

        let request = ModelRequest::new(system, latitude, longitude, &weather);
        match self.model.predict(&request).await {
            Ok(result) => {
                info!("remote model prediction for {}", system.city);
                Ok(result)
            }
            Err(e) => {
                warn!("model call failed ({e}), computing locally for {}", system.city);
                Ok(self.estimate_local(system, &weather, Strategy::WeatherDriven))
            }
        }
    }

    /// Offline prediction from caller-supplied weather readings, using the
    /// simple city-table strategy. No network I/O.
    pub fn predict_local(
        &self,
        system: &SystemConfig,
        weather: &WeatherSnapshot,
    ) -> Result<PredictionResult, Error> {
        system.validate()?;
        weather.validate()?;
        Ok(self.estimate_local(system, weather, Strategy::Simple))
    }

    fn estimate_local(
        &self,
        system: &SystemConfig,
        weather: &WeatherSnapshot,
        strategy: Strategy,
    ) -> PredictionResult {
        let month0 = chrono::Local::now().month0();
        estimator::estimate(system, weather, strategy, month0, &mut rand::rng())
    }
}
