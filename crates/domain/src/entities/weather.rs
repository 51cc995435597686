//! Current weather entities

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinates;

/// Temperature, pressure and humidity block (`main` in the provider payload)
///
/// Temperatures are in °C, pressure in hPa, humidity in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempData {
    /// Measured temperature
    pub temp: f64,
    /// Perceived temperature
    pub feels_like: f64,
    /// Minimum temperature in the area
    pub temp_min: f64,
    /// Maximum temperature in the area
    pub temp_max: f64,
    /// Atmospheric pressure at sea level
    pub pressure: i64,
    /// Relative humidity
    pub humidity: i64,
}

/// Wind speed and direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Speed in m/s
    pub speed: f64,
    /// Meteorological direction in degrees (0-360)
    #[serde(rename = "deg")]
    pub degree: i32,
    /// Gust speed in m/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gust: Option<f64>,
}

/// Short sky-condition summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortWeather {
    /// Provider condition id (e.g. 800 for clear sky)
    pub id: i64,
    /// Condition group, e.g. "Clouds"
    pub main: String,
    /// Condition text, e.g. "scattered clouds"
    pub description: String,
    /// Provider icon id
    pub icon: String,
}

/// A current-weather snapshot for one place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Position of the weather station
    pub coord: Coordinates,
    /// Temperatures, pressure and humidity
    pub main: TempData,
    /// Sky conditions, never empty
    pub weather: Vec<ShortWeather>,
    /// Wind
    pub wind: Wind,
    /// Cloud cover, keyed by `all`
    pub clouds: BTreeMap<String, i64>,
    /// Visibility in meters
    pub visibility: Option<i64>,
    /// Observation time (unix seconds)
    pub timestamp_utc: i64,
    /// Sunrise (unix seconds)
    pub sunrise: i64,
    /// Sunset (unix seconds)
    pub sunset: i64,
    /// Shift from UTC in seconds
    pub utc_offset_seconds: i32,
    /// Station name as reported by the provider
    pub location_name: String,
    /// ISO country code as reported by the provider
    pub country_code: String,
}

impl CurrentWeather {
    /// The condition used for display (the first one)
    #[must_use]
    pub fn primary_condition(&self) -> Option<&ShortWeather> {
        self.weather.first()
    }

    /// Cloud cover in percent if reported
    #[must_use]
    pub fn cloudiness(&self) -> Option<i64> {
        self.clouds.get("all").copied()
    }

    /// Visibility in meters if reported and positive
    #[must_use]
    pub fn known_visibility(&self) -> Option<i64> {
        self.visibility.filter(|v| *v > 0)
    }
}
