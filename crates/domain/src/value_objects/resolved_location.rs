//! Location resolved by the geocoder from a free-text query

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Coordinates;

/// A place name resolved to coordinates and a canonical display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Canonical display name, e.g. "Hamburg, Germany"
    pub display_name: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// ISO 3166-1 alpha-2 country code (lowercase as delivered by the geocoder)
    #[serde(default)]
    pub country_code: Option<String>,
    /// State or region
    #[serde(default)]
    pub state: Option<String>,
    /// Country name
    #[serde(default)]
    pub country: Option<String>,
    /// Population, if the geocoder knows it
    #[serde(default)]
    pub population: Option<f64>,
}

impl ResolvedLocation {
    /// Create a location with only the mandatory fields set
    #[must_use]
    pub fn new(display_name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            display_name: display_name.into(),
            lat,
            lon,
            country_code: None,
            state: None,
            country: None,
            population: None,
        }
    }

    /// Coordinates of this location
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates::new_unchecked(self.lat, self.lon)
    }

    /// Population if known and positive
    #[must_use]
    pub fn known_population(&self) -> Option<f64> {
        self.population.filter(|p| *p > 0.0)
    }
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}
