//! Geocoding adapter - Implements LocationPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::LocationPort;
use async_trait::async_trait;
use domain::ResolvedLocation;
use integration_geocoding::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient,
};
use tracing::{debug, instrument};

/// Adapter resolving locations through Nominatim
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: NominatimGeocodingClient,
}

impl GeocodingAdapter {
    /// Create an adapter from a Nominatim configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::LocationNotFound(query) => ApplicationError::LocationNotFound(query),
            e @ (GeocodingError::ConnectionFailed(_)
            | GeocodingError::RequestFailed(_)
            | GeocodingError::ParseError(_)
            | GeocodingError::Timeout) => ApplicationError::ExternalService(e.to_string()),
        }
    }
}

#[async_trait]
impl LocationPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn lookup_location(&self, query: &str) -> Result<ResolvedLocation, ApplicationError> {
        let location = self.client.lookup(query).await.map_err(Self::map_error)?;
        debug!(
            name = %location.display_name,
            lat = location.lat,
            lon = location.lon,
            "Resolved location"
        );
        Ok(location)
    }
}
