//! Nominatim geocoding client
//!
//! Converts free-form location strings to a resolved place using
//! the [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//!
//! Implements rate limiting (max 1 request/second per Nominatim usage policy).

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::{Coordinates, ResolvedLocation};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Minimum spacing between two Nominatim requests
const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(1100);

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// Country code filter (e.g., "de" for Germany, empty for worldwide)
    #[serde(default)]
    pub country_filter: String,

    /// Preferred language for place names
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// User-Agent sent with every request, required by the usage policy
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    5
}

fn default_accept_language() -> String {
    "en".to_string()
}

fn default_user_agent() -> String {
    concat!("OWeather/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_geocoding_timeout_secs(),
            country_filter: String::new(),
            accept_language: default_accept_language(),
            user_agent: default_user_agent(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Default::default()
        }
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Location could not be resolved
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-form location query to the best matching place
    async fn lookup(&self, query: &str) -> Result<ResolvedLocation, GeocodingError>;
}

/// Nominatim-based geocoding client with rate limiting
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
    last_request: Mutex<Option<Instant>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            last_request: Mutex::new(None),
        })
    }

    /// Enforce Nominatim's rate limit (max 1 request per second)
    async fn rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < MIN_REQUEST_INTERVAL {
                let wait = MIN_REQUEST_INTERVAL.saturating_sub(elapsed);
                debug!(?wait, "Rate limiting geocoding request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    fn to_resolved(query: &str, result: NominatimResult) -> Result<ResolvedLocation, GeocodingError> {
        let lat: f64 = result
            .lat
            .parse()
            .map_err(|_| GeocodingError::ParseError("Invalid latitude".to_string()))?;
        let lon: f64 = result
            .lon
            .parse()
            .map_err(|_| GeocodingError::ParseError("Invalid longitude".to_string()))?;
        Coordinates::new(lat, lon).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let address = result.address.unwrap_or_default();
        let display_name = short_display_name(
            result.name.as_deref(),
            address.country.as_deref(),
            result.display_name.as_deref(),
        )
        .unwrap_or_else(|| query.to_string());

        let population = result
            .extratags
            .as_ref()
            .and_then(|tags| tags.get("population"))
            .and_then(|p| parse_population(p));

        Ok(ResolvedLocation {
            display_name,
            lat,
            lon,
            country_code: address.country_code,
            state: address.state,
            country: address.country,
            population,
        })
    }
}

/// "Name, Country" when both are known, else Nominatim's full display name
fn short_display_name(
    name: Option<&str>,
    country: Option<&str>,
    full: Option<&str>,
) -> Option<String> {
    match (name.filter(|n| !n.is_empty()), country) {
        (Some(name), Some(country)) if name != country => Some(format!("{name}, {country}")),
        (Some(name), _) => Some(name.to_string()),
        (None, _) => full.filter(|f| !f.is_empty()).map(ToString::to_string),
    }
}

/// Parse an OSM population tag such as "1841179" or "1 841 179"
fn parse_population(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | ',' | '\''))
        .collect();
    digits.parse::<f64>().ok().filter(|p| *p > 0.0)
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn lookup(&self, query: &str) -> Result<ResolvedLocation, GeocodingError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodingError::LocationNotFound(
                "Location must not be empty".to_string(),
            ));
        }

        self.rate_limit().await;

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let mut params = vec![
            ("q", query.to_string()),
            ("format", "jsonv2".to_string()),
            ("limit", "1".to_string()),
            ("addressdetails", "1".to_string()),
            ("extratags", "1".to_string()),
            ("accept-language", self.config.accept_language.clone()),
        ];

        if !self.config.country_filter.is_empty() {
            params.push(("countrycodes", self.config.country_filter.clone()));
        }

        debug!(%query, "Geocoding location");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let result = results
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::LocationNotFound(query.to_string()))?;

        let location = Self::to_resolved(query, result)?;
        debug!(%query, name = %location.display_name, lat = location.lat, lon = location.lon, "Geocoded location");
        Ok(location)
    }
}

/// Raw Nominatim API response
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    address: Option<NominatimAddress>,
    #[serde(default)]
    extratags: Option<HashMap<String, String>>,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    country_code: Option<String>,
}
