//! Integration configurations: OpenWeatherMap.
//!
//! Nominatim uses [`integration_geocoding::NominatimConfig`] directly since it
//! carries no secrets.

use integration_weather::WeatherConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

// ==============================
// Weather Configuration
// ==============================

/// OpenWeatherMap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// API key (32 characters); sensitive, never serialized
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// OpenWeatherMap API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,

    /// Number of 3-hour forecast steps (1-40)
    #[serde(default = "default_forecast_steps")]
    pub forecast_steps: u8,

    /// Language for condition descriptions
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_weather_timeout() -> u64 {
    10
}

const fn default_forecast_steps() -> u8 {
    24
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_secs: default_weather_timeout(),
            forecast_steps: default_forecast_steps(),
            language: default_language(),
        }
    }
}

impl From<&WeatherAppConfig> for WeatherConfig {
    fn from(config: &WeatherAppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
            forecast_steps: config.forecast_steps,
            language: config.language.clone(),
        }
    }
}
