//! Application services - Use case implementations

mod weather_command_service;
pub mod weather_formatter;

pub use weather_command_service::WeatherCommandService;
pub use weather_formatter::{
    FormatError, current_summary, forecast_title, render_current, render_forecast,
};
