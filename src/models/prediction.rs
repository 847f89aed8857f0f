use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Error;
use crate::models::weather::WeatherSnapshot;

// ─── Request side ────────────────────────────────────────────────────────────

fn default_azimuth() -> f64 {
    180.0 // south-facing
}

fn default_panel_efficiency() -> f64 {
    20.0 // typical crystalline-Si module
}

/// A solar installation as described by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SystemConfig {
    /// City name; must resolve through the city catalog when weather has to
    /// be fetched by coordinate.
    pub city: String,
    /// Rated DC capacity in kW.
    pub capacity_kw: f64,
    /// Panel inclination from horizontal, degrees.
    pub tilt_deg: f64,
    /// Panel azimuth, degrees from north.
    #[serde(default = "default_azimuth")]
    pub azimuth_deg: f64,
    /// Nameplate panel efficiency, percent.
    #[serde(default = "default_panel_efficiency")]
    pub panel_efficiency_percent: f64,
}

impl SystemConfig {
    /// Range checks the estimator relies on. The estimator itself is total
    /// over validated inputs; callers run this first.
    pub fn validate(&self) -> Result<(), Error> {
        if self.capacity_kw <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "capacity must be positive, got {} kW",
                self.capacity_kw
            )));
        }
        if !(0.0..=90.0).contains(&self.tilt_deg) {
            return Err(Error::InvalidInput(format!(
                "tilt angle must be 0-90°, got {}°",
                self.tilt_deg
            )));
        }
        Ok(())
    }
}

/// Body for the offline prediction endpoint: the caller supplies the weather
/// readings instead of having them fetched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocalPredictRequest {
    pub system: SystemConfig,
    pub weather: WeatherSnapshot,
}

// ─── Result side ─────────────────────────────────────────────────────────────

/// One clock-hour sample of the generation curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HourlySample {
    /// Hour label, `"HH:00"`.
    pub hour: String,
    /// Instantaneous power, kW.
    pub power: f64,
    /// Instantaneous efficiency, percent.
    pub efficiency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Optimization,
    Maintenance,
    Seasonal,
    Performance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub impact: ImpactLevel,
}

/// Full forecast for one request.
///
/// Serialized in camelCase — the same shape the remote prediction model
/// returns, so a model response deserializes into this directly.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Instantaneous maximum output, kW.
    pub peak_power: f64,
    /// Estimated energy over one day, kWh.
    pub daily_energy: f64,
    /// Realized/theoretical output ratio, percent, clamped to [0, 95].
    pub system_efficiency: f64,
    /// Exactly 24 samples, hours 00–23.
    pub chart_data: Vec<HourlySample>,
    pub recommendations: Vec<Recommendation>,
    /// Tilt angle that maximizes output for the location and strategy.
    pub optimal_tilt: f64,
    pub seasonal_tip: String,
}
