//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns the
//! configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ConfigurationError, TelemetryAppConfig, WeatherAppConfig};
pub use telemetry::{TelemetryError, init_telemetry};
