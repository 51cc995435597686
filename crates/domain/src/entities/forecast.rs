//! Forecast entities

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::weather::{ShortWeather, TempData, Wind};
use crate::value_objects::Coordinates;

/// Number of three-hour steps that make up a complete day
pub const STEPS_PER_DAY: usize = 8;

/// One three-hour forecast step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastStep {
    /// Start of the step (unix seconds)
    pub timestamp_utc: i64,
    /// Temperatures, pressure and humidity
    pub main: TempData,
    /// Sky conditions, never empty
    pub weather: Vec<ShortWeather>,
    /// Cloud cover, keyed by `all`
    pub clouds: BTreeMap<String, i64>,
    /// Wind
    pub wind: Wind,
    /// Rain volume for the last three hours in mm
    pub rain_last_3h: Option<f64>,
}

impl ForecastStep {
    /// Cloud cover in percent if reported
    #[must_use]
    pub fn cloudiness(&self) -> Option<i64> {
        self.clouds.get("all").copied()
    }
}

/// The place a forecast was issued for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastCity {
    /// Position of the forecast point
    pub coord: Coordinates,
    /// Name as reported by the provider
    pub name: String,
    /// ISO country code
    pub country: String,
    /// Population (0 if unknown)
    pub population: i64,
    /// Shift from UTC in seconds
    pub utc_offset_seconds: i32,
}

/// A multi-step forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Steps in ascending time order
    pub steps: Vec<ForecastStep>,
    /// Forecast location
    pub city: ForecastCity,
}

impl Forecast {
    /// Create a forecast, ordering the steps by timestamp
    #[must_use]
    pub fn new(mut steps: Vec<ForecastStep>, city: ForecastCity) -> Self {
        steps.sort_by_key(|s| s.timestamp_utc);
        Self { steps, city }
    }

    /// Whether the forecast has no steps at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
