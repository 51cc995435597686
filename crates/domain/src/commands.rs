//! Bot commands - Strongly typed representations of chat commands

use serde::{Deserialize, Serialize};

/// All commands the weather plugin understands
///
/// Each variant carries the free-text location exactly as the user typed it.
/// The location is resolved to coordinates later by the geocoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotCommand {
    /// Show the current weather for a location
    CurrentWeather {
        /// Free-text location, e.g. "Hamburg" or "30629, de"
        location: String,
    },

    /// Show the 3-hourly forecast for the next days
    Forecast {
        /// Free-text location
        location: String,
    },

    /// Show help information
    Help {
        /// Specific command to get help for
        command: Option<String>,
    },
}

impl BotCommand {
    /// Name of the command as typed in chat
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CurrentWeather { .. } => "weather",
            Self::Forecast { .. } => "forecast",
            Self::Help { .. } => "help",
        }
    }

    /// Get a human-readable description of the command
    pub fn description(&self) -> String {
        match self {
            Self::CurrentWeather { location } => format!("Current weather for {location}"),
            Self::Forecast { location } => format!("Weather forecast for {location}"),
            Self::Help { command } => match command {
                Some(cmd) => format!("Help for: {cmd}"),
                None => "General help".to_string(),
            },
        }
    }
}
