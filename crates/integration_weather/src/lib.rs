//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap REST API (<https://openweathermap.org/api>).
//! Fetches current weather and the 3-hourly forecast for a coordinate pair
//! and decodes the JSON payloads into the domain weather model.

pub mod client;
pub mod decode;
mod models;

pub use client::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
pub use decode::{DecodeError, api_error, decode_current, decode_forecast};
