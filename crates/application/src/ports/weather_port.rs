//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::{ApiKey, Coordinates, CurrentWeather, Forecast};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[allow(clippy::struct_field_names)] // automock generates struct with `get_*` prefixes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get the current weather at the given coordinates
    async fn get_current_weather(
        &self,
        api_key: &ApiKey,
        coords: Coordinates,
    ) -> Result<CurrentWeather, ApplicationError>;

    /// Get the 3-hourly forecast at the given coordinates
    async fn get_forecast(
        &self,
        api_key: &ApiKey,
        coords: Coordinates,
    ) -> Result<Forecast, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
