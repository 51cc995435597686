//! Domain entities - Weather snapshots and forecasts as delivered by the provider

mod forecast;
mod weather;

pub use forecast::{Forecast, ForecastCity, ForecastStep, STEPS_PER_DAY};
pub use weather::{CurrentWeather, ShortWeather, TempData, Wind};
