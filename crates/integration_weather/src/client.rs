//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap 2.5 API.

use std::time::Duration;

use async_trait::async_trait;
use domain::{ApiKey, Coordinates, CurrentWeather, Forecast};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::decode::{self, DecodeError};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be created or the service could not be reached
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request timed out
    #[error("Weather request timed out")]
    Timeout,

    /// The service answered with a non-success status and no API error body
    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// The response body could not be decoded or is an API error object
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of 3-hour forecast steps to request (1-40, default: 24)
    #[serde(default = "default_forecast_steps")]
    pub forecast_steps: u8,

    /// Language for condition descriptions (default: en)
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_forecast_steps() -> u8 {
    24
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            forecast_steps: default_forecast_steps(),
            language: default_language(),
        }
    }
}

impl WeatherConfig {
    /// Create a configuration pointing at a local test server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Default::default()
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather at the given coordinates
    async fn get_current(
        &self,
        api_key: &ApiKey,
        coords: Coordinates,
    ) -> Result<CurrentWeather, WeatherError>;

    /// Get the 3-hourly forecast at the given coordinates
    async fn get_forecast(
        &self,
        api_key: &ApiKey,
        coords: Coordinates,
    ) -> Result<Forecast, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    fn validate_coordinates(coords: Coordinates) -> Result<(), WeatherError> {
        if coords.is_valid() {
            Ok(())
        } else {
            Err(WeatherError::InvalidCoordinates)
        }
    }

    /// Query parameters shared by both endpoints
    fn base_params(&self, api_key: &ApiKey, coords: Coordinates) -> Vec<(&'static str, String)> {
        vec![
            ("lat", coords.lat.to_string()),
            ("lon", coords.lon.to_string()),
            ("appid", api_key.expose().to_string()),
            ("units", "metric".to_string()),
            ("lang", self.config.language.clone()),
        ]
    }

    /// Issue a GET request and return the body of a successful response
    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<String, WeatherError> {
        let url = format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'));
        debug!(url = %url, "Fetching weather data");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Timeout
                } else if e.is_connect() {
                    WeatherError::ConnectionFailed(e.to_string())
                } else {
                    WeatherError::RequestFailed(e.to_string())
                }
            })?;

        Self::read_body(response).await
    }

    async fn read_body(response: Response) -> Result<String, WeatherError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        if status.is_success() {
            return Ok(body);
        }

        warn!(status = %status, "Weather service returned an error status");
        match decode::api_error(&body) {
            Some(err) => Err(WeatherError::Decode(err)),
            None => Err(WeatherError::HttpStatus(status.as_u16())),
        }
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self, api_key), fields(lat = %coords.lat, lon = %coords.lon))]
    async fn get_current(
        &self,
        api_key: &ApiKey,
        coords: Coordinates,
    ) -> Result<CurrentWeather, WeatherError> {
        Self::validate_coordinates(coords)?;

        let params = self.base_params(api_key, coords);
        let body = self.fetch("weather", &params).await?;
        let weather = decode::decode_current(&body)?;

        debug!(location = %weather.location_name, "Decoded current weather");
        Ok(weather)
    }

    #[instrument(skip(self, api_key), fields(lat = %coords.lat, lon = %coords.lon))]
    async fn get_forecast(
        &self,
        api_key: &ApiKey,
        coords: Coordinates,
    ) -> Result<Forecast, WeatherError> {
        Self::validate_coordinates(coords)?;

        let mut params = self.base_params(api_key, coords);
        params.push(("cnt", self.config.forecast_steps.clamp(1, 40).to_string()));
        let body = self.fetch("forecast", &params).await?;
        let forecast = decode::decode_forecast(&body)?;

        debug!(steps = forecast.steps.len(), city = %forecast.city.name, "Decoded forecast");
        Ok(forecast)
    }
}
