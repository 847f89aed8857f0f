use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Error;

// ─── Domain snapshot ─────────────────────────────────────────────────────────

/// Weather conditions at a single point in time, as fed to the estimator.
///
/// Irradiance is interpreted by the estimation strategy: W/m² (reference
/// 1000) in weather-driven mode, kWh/m²/day (reference 5.5) in simple mode.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub cloud_cover_percent: f64,
    pub wind_speed: f64,
    pub irradiance: f64,
    /// Surface pressure in hPa. Reported for display; no derating uses it.
    pub pressure_hpa: Option<f64>,
}

impl WeatherSnapshot {
    /// Fixed snapshot used whenever the live fetch fails, so the estimator
    /// always receives a usable input.
    pub fn fallback() -> Self {
        Self {
            temperature_c: 28.0,
            humidity_percent: 65.0,
            cloud_cover_percent: 20.0,
            wind_speed: 5.0,
            irradiance: 800.0,
            pressure_hpa: Some(1013.0),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..=100.0).contains(&self.humidity_percent) {
            return Err(Error::InvalidInput(format!(
                "humidity must be 0-100%, got {}",
                self.humidity_percent
            )));
        }
        if !(0.0..=100.0).contains(&self.cloud_cover_percent) {
            return Err(Error::InvalidInput(format!(
                "cloud cover must be 0-100%, got {}",
                self.cloud_cover_percent
            )));
        }
        if self.irradiance < 0.0 {
            return Err(Error::InvalidInput(format!(
                "irradiance must be non-negative, got {}",
                self.irradiance
            )));
        }
        if self.wind_speed < 0.0 {
            return Err(Error::InvalidInput(format!(
                "wind speed must be non-negative, got {}",
                self.wind_speed
            )));
        }
        Ok(())
    }
}

// ─── Open-Meteo wire types ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub current: CurrentConditions,
    pub hourly: HourlyRadiation,
}

#[derive(Debug, Deserialize)]
pub struct CurrentConditions {
    pub temperature_2m: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub surface_pressure: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub cloud_cover: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct HourlyRadiation {
    pub solar_radiation_instant: Vec<f64>,
}
