//! Application configuration
//!
//! Split into focused sub-modules:
//! - `integrations`: OpenWeatherMap and Nominatim settings
//! - `telemetry`: log filter and output format
//!
//! Sources are layered: built-in defaults, then `config.toml` (or an explicit
//! path), then `OWEATHER_*` environment variables with `__` between nesting
//! levels, e.g. `OWEATHER_WEATHER__API_KEY`.

mod integrations;
mod telemetry;

use std::path::Path;

use integration_geocoding::NominatimConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use integrations::WeatherAppConfig;
pub use telemetry::TelemetryAppConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "OWEATHER";

/// Config file looked up in the working directory when no path is given
const DEFAULT_CONFIG_NAME: &str = "config";

/// Largest forecast step count the provider accepts
const MAX_FORECAST_STEPS: u8 = 40;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value is out of range
    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid {
        /// Dotted key of the offending value
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenWeatherMap configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Nominatim geocoding configuration
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, ConfigurationError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (required) or the default one
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        Self::build(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn build(path: Option<&Path>, env: config::Environment) -> Result<Self, ConfigurationError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        debug!(
            weather_url = %config.weather.base_url,
            geocoding_url = %config.geocoding.base_url,
            api_key_set = config.weather.api_key.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check ranges and URLs
    ///
    /// The API key is not checked here; a missing or malformed key is
    /// reported to the chat user when a command runs.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_url("weather.base_url", &self.weather.base_url)?;
        if self.weather.timeout_secs == 0 {
            return Err(ConfigurationError::Invalid {
                field: "weather.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !(1..=MAX_FORECAST_STEPS).contains(&self.weather.forecast_steps) {
            return Err(ConfigurationError::Invalid {
                field: "weather.forecast_steps",
                reason: format!("must be between 1 and {MAX_FORECAST_STEPS}"),
            });
        }

        validate_url("geocoding.base_url", &self.geocoding.base_url)?;
        if self.geocoding.timeout_secs == 0 {
            return Err(ConfigurationError::Invalid {
                field: "geocoding.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.geocoding.user_agent.trim().is_empty() {
            return Err(ConfigurationError::Invalid {
                field: "geocoding.user_agent",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<(), ConfigurationError> {
    let parsed = url::Url::parse(value).map_err(|e| ConfigurationError::Invalid {
        field,
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigurationError::Invalid {
            field,
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
