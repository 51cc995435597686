//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{ApiKey, Coordinates, CurrentWeather, DomainError, Forecast};
use integration_weather::{
    DecodeError, OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap API
#[derive(Debug)]
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenWeatherClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::Decode(DecodeError::Api { message, .. }) => {
                ApplicationError::ProviderRejected(message)
            },
            WeatherError::Decode(e) => ApplicationError::InvalidResponse(e.to_string()),
            WeatherError::InvalidCoordinates => DomainError::InvalidCoordinates.into(),
            e @ (WeatherError::ConnectionFailed(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::Timeout
            | WeatherError::HttpStatus(_)) => ApplicationError::ExternalService(e.to_string()),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self, api_key), fields(lat = coords.lat, lon = coords.lon))]
    async fn get_current_weather(
        &self,
        api_key: &ApiKey,
        coords: Coordinates,
    ) -> Result<CurrentWeather, ApplicationError> {
        let result = self
            .client
            .get_current(api_key, coords)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.main.temp,
                    location = %current.location_name,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result
    }

    #[instrument(skip(self, api_key), fields(lat = coords.lat, lon = coords.lon))]
    async fn get_forecast(
        &self,
        api_key: &ApiKey,
        coords: Coordinates,
    ) -> Result<Forecast, ApplicationError> {
        let result = self
            .client
            .get_forecast(api_key, coords)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(steps = forecast.steps.len(), "Retrieved weather forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
            },
        }

        result
    }
}
