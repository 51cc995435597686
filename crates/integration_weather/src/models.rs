//! Raw OpenWeatherMap response models
//!
//! These mirror the provider's JSON layout and are mapped into the flat
//! domain entities after decoding.

use std::collections::BTreeMap;

use domain::{
    Coordinates, CurrentWeather, Forecast, ForecastCity, ForecastStep, ShortWeather, TempData,
    Wind,
};
use serde::Deserialize;

/// Response of `GET /weather`
#[derive(Debug, Deserialize)]
pub struct CurrentResponse {
    pub coord: Coordinates,
    pub weather: Vec<ShortWeather>,
    pub main: TempData,
    #[serde(default)]
    pub visibility: Option<i64>,
    pub wind: Wind,
    pub clouds: BTreeMap<String, i64>,
    pub dt: i64,
    pub sys: SysData,
    pub timezone: i32,
    pub name: String,
}

/// `sys` block of the current-weather response
#[derive(Debug, Deserialize)]
pub struct SysData {
    #[serde(default)]
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

/// Response of `GET /forecast`
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<StepResponse>,
    pub city: CityResponse,
}

/// One entry of the forecast `list`
#[derive(Debug, Deserialize)]
pub struct StepResponse {
    pub dt: i64,
    pub main: TempData,
    pub weather: Vec<ShortWeather>,
    pub clouds: BTreeMap<String, i64>,
    pub wind: Wind,
    #[serde(default)]
    pub rain: Option<VolumeData>,
}

/// Precipitation volume block (`rain` / `snow`)
#[derive(Debug, Deserialize)]
pub struct VolumeData {
    #[serde(rename = "3h", default)]
    pub three_hours: Option<f64>,
}

/// `city` block of the forecast response
#[derive(Debug, Deserialize)]
pub struct CityResponse {
    pub coord: Coordinates,
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub population: i64,
    pub timezone: i32,
}

impl From<CurrentResponse> for CurrentWeather {
    fn from(raw: CurrentResponse) -> Self {
        Self {
            coord: raw.coord,
            main: raw.main,
            weather: raw.weather,
            wind: raw.wind,
            clouds: raw.clouds,
            visibility: raw.visibility,
            timestamp_utc: raw.dt,
            sunrise: raw.sys.sunrise,
            sunset: raw.sys.sunset,
            utc_offset_seconds: raw.timezone,
            location_name: raw.name,
            country_code: raw.sys.country,
        }
    }
}

impl From<StepResponse> for ForecastStep {
    fn from(raw: StepResponse) -> Self {
        Self {
            timestamp_utc: raw.dt,
            main: raw.main,
            weather: raw.weather,
            clouds: raw.clouds,
            wind: raw.wind,
            rain_last_3h: raw.rain.and_then(|r| r.three_hours),
        }
    }
}

impl From<CityResponse> for ForecastCity {
    fn from(raw: CityResponse) -> Self {
        Self {
            coord: raw.coord,
            name: raw.name,
            country: raw.country,
            population: raw.population,
            utc_offset_seconds: raw.timezone,
        }
    }
}

impl From<ForecastResponse> for Forecast {
    fn from(raw: ForecastResponse) -> Self {
        Self::new(
            raw.list.into_iter().map(ForecastStep::from).collect(),
            raw.city.into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_without_rain_maps_to_none() {
        let json = r#"{
            "dt": 1700000000,
            "main": {"temp": 1.0, "feels_like": -2.0, "temp_min": 0.5, "temp_max": 1.5,
                     "pressure": 1000, "humidity": 90},
            "weather": [{"id": 600, "main": "Snow", "description": "light snow", "icon": "13n"}],
            "clouds": {"all": 100},
            "wind": {"speed": 5.0, "deg": 10}
        }"#;
        let raw: StepResponse = serde_json::from_str(json).unwrap();
        let step = ForecastStep::from(raw);
        assert!(step.rain_last_3h.is_none());
        assert_eq!(step.cloudiness(), Some(100));
    }

    #[test]
    fn step_with_rain_keeps_volume() {
        let json = r#"{
            "dt": 1700000000,
            "main": {"temp": 8.0, "feels_like": 6.0, "temp_min": 7.5, "temp_max": 8.5,
                     "pressure": 1005, "humidity": 95},
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "clouds": {"all": 90},
            "wind": {"speed": 3.0, "deg": 200},
            "rain": {"3h": 0.42}
        }"#;
        let raw: StepResponse = serde_json::from_str(json).unwrap();
        let step = ForecastStep::from(raw);
        assert_eq!(step.rain_last_3h, Some(0.42));
    }

    #[test]
    fn city_population_defaults_to_zero() {
        let json = r#"{"coord": {"lat": 1.0, "lon": 2.0}, "name": "Somewhere", "timezone": 0}"#;
        let raw: CityResponse = serde_json::from_str(json).unwrap();
        let city = ForecastCity::from(raw);
        assert_eq!(city.population, 0);
        assert!(city.country.is_empty());
    }
}
