use std::time::Duration;

/// Runtime configuration, read from the process environment once at startup.
///
/// Everything downstream receives this as an explicit value — no ambient
/// `env::var` lookups after `from_env` returns.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub weather: WeatherConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Forecast API base URL (Open-Meteo compatible).
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Base URL of the remote prediction model; `/predict` is appended.
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Config {
    /// Environment variables and their fallback defaults:
    ///
    /// | Variable               | Default                       |
    /// |------------------------|-------------------------------|
    /// | `SUNSIGHT_PORT`        | `8080`                        |
    /// | `SUNSIGHT_WEATHER_URL` | `https://api.open-meteo.com`  |
    /// | `SUNSIGHT_MODEL_URL`   | `http://localhost:8000`       |
    /// | `SUNSIGHT_API_KEY`     | `YOUR_API_KEY` (placeholder)  |
    /// | `SUNSIGHT_TIMEOUT_S`   | `10`                          |
    pub fn from_env() -> Self {
        let port = std::env::var("SUNSIGHT_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);
        let timeout_s: u64 = std::env::var("SUNSIGHT_TIMEOUT_S")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let timeout = Duration::from_secs(timeout_s);

        Self {
            server: ServerConfig { port },
            weather: WeatherConfig {
                base_url: std::env::var("SUNSIGHT_WEATHER_URL")
                    .unwrap_or_else(|_| "https://api.open-meteo.com".to_string()),
                timeout,
            },
            model: ModelConfig {
                base_url: std::env::var("SUNSIGHT_MODEL_URL")
                    .unwrap_or_else(|_| "http://localhost:8000".to_string()),
                api_key: std::env::var("SUNSIGHT_API_KEY")
                    .unwrap_or_else(|_| "YOUR_API_KEY".to_string()),
                timeout,
            },
        }
    }
}
