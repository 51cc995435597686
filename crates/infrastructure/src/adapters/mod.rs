//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geocoding_adapter;
mod settings_adapter;
mod weather_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use settings_adapter::ConfigSettingsAdapter;
pub use weather_adapter::WeatherAdapter;
