//! Domain layer for the OWeather chat plugin
//!
//! Contains the weather data model, value objects, bot commands and domain errors.
//! This layer performs no I/O and defines the ubiquitous language.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use commands::BotCommand;
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
