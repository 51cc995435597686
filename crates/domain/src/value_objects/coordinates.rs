//! Geographic coordinates value object

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A geographic position as reported by the weather API (`{"lat": .., "lon": ..}`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lon: f64,
}

impl Coordinates {
    /// Create new coordinates with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::InvalidCoordinates);
        }
        Ok(Self { lat, lon })
    }

    /// Create coordinates without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check whether both components are in range
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::new(self.lat, self.lon).is_ok()
    }

    /// Latitude with hemisphere prefix, e.g. `N52.52` or `S33.87`
    #[must_use]
    pub fn latitude_label(&self) -> String {
        if self.lat > 0.0 {
            format!("N{}", self.lat)
        } else {
            format!("S{}", -self.lat + 0.0)
        }
    }

    /// Longitude with hemisphere prefix, e.g. `E13.41` or `W0.1278`
    #[must_use]
    pub fn longitude_label(&self) -> String {
        if self.lon > 0.0 {
            format!("E{}", self.lon)
        } else {
            format!("W{}", -self.lon + 0.0)
        }
    }
}
