//! Weather command service
//!
//! Executes parsed chat commands: checks the configured API key, resolves the
//! location, fetches from the weather provider and renders the reply.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use domain::{ApiKey, BotCommand, ResolvedLocation};
use tracing::{debug, info, instrument, warn};

use super::weather_formatter::{current_summary, forecast_title, render_current, render_forecast};
use crate::error::ApplicationError;
use crate::markup::{Blob, CommandReply, header2, highlight, make_chatcmd};
use crate::ports::{LocationPort, SettingsPort, WeatherPort};

/// Title of the current-weather detail blob
const DETAILS_TITLE: &str = "Details";

/// Example invocations shown in the help blob
const EXAMPLES: [(&str, &str); 3] = [
    ("weather", "Hamburg"),
    ("forecast", "Hamburg, US"),
    ("forecast", "30629, de"),
];

/// Service executing weather bot commands
pub struct WeatherCommandService {
    weather: Arc<dyn WeatherPort>,
    locations: Arc<dyn LocationPort>,
    settings: Arc<dyn SettingsPort>,
}

impl fmt::Debug for WeatherCommandService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherCommandService").finish_non_exhaustive()
    }
}

impl WeatherCommandService {
    /// Create a new service from its ports
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        locations: Arc<dyn LocationPort>,
        settings: Arc<dyn SettingsPort>,
    ) -> Self {
        Self {
            weather,
            locations,
            settings,
        }
    }

    /// Execute a command and produce the chat reply
    ///
    /// Errors are turned into their user-facing message, so this never fails.
    #[instrument(skip(self, command), fields(command = command.name()))]
    pub async fn handle(&self, command: &BotCommand) -> CommandReply {
        match self.execute(command).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Weather command failed");
                CommandReply::text(e.user_message())
            },
        }
    }

    /// Execute a command, keeping the error for the caller
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, the location cannot be
    /// resolved, the provider call fails or the reply cannot be rendered.
    pub async fn execute(&self, command: &BotCommand) -> Result<CommandReply, ApplicationError> {
        match command {
            BotCommand::CurrentWeather { location } => self.current_weather(location).await,
            BotCommand::Forecast { location } => self.forecast(location).await,
            BotCommand::Help { command } => Ok(Self::help(command.as_deref())),
        }
    }

    /// Current weather for a free-text location
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    #[instrument(skip(self))]
    pub async fn current_weather(&self, location: &str) -> Result<CommandReply, ApplicationError> {
        let api_key = self.api_key()?;
        let resolved = self.resolve("weather", location).await?;

        let weather = self
            .weather
            .get_current_weather(&api_key, resolved.coordinates())
            .await?;
        debug!(location = %weather.location_name, temp = weather.main.temp, "Fetched current weather");

        let summary = current_summary(&weather, &resolved);
        let body = render_current(&weather, &resolved)?;
        Ok(CommandReply::with_blob(summary, Blob::new(DETAILS_TITLE, body)))
    }

    /// Multi-day forecast for a free-text location
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    #[instrument(skip(self))]
    pub async fn forecast(&self, location: &str) -> Result<CommandReply, ApplicationError> {
        let api_key = self.api_key()?;
        let resolved = self.resolve("forecast", location).await?;

        let forecast = self
            .weather
            .get_forecast(&api_key, resolved.coordinates())
            .await?;
        debug!(steps = forecast.steps.len(), "Fetched forecast");

        let title = forecast_title(&resolved);
        let body = render_forecast(&forecast, &resolved, Utc::now())?;
        Ok(CommandReply::with_blob(title.clone(), Blob::new(title, body)))
    }

    /// Help for all commands or a single one
    #[must_use]
    pub fn help(topic: Option<&str>) -> CommandReply {
        match topic {
            Some("weather" | "oweather") => CommandReply::text(usage("weather")),
            Some("forecast") => CommandReply::text(usage("forecast")),
            Some(other) => CommandReply::text(format!(
                "No help available for {}.",
                highlight(other)
            )),
            None => {
                let mut body = format!("{}\n", header2("Commands"));
                body.push_str(&format!(
                    "{} shows the current weather, {} a 3-day forecast.\n",
                    highlight("weather <location>"),
                    highlight("forecast <location>")
                ));
                body.push_str("The location can be a place name, optionally followed by a country code, or a zip code and country code.\n");
                body.push_str(&format!("\n{}\n", header2("Examples")));
                for (command, location) in EXAMPLES {
                    let line = format!("{command} {location}");
                    body.push_str(&format!(
                        "{}\n",
                        make_chatcmd(&line, &format!("/tell <myname> {line}"))
                    ));
                }
                CommandReply::with_blob("Weather Help", Blob::new("Weather Help", body))
            },
        }
    }

    fn api_key(&self) -> Result<ApiKey, ApplicationError> {
        let setting = self.settings.weather_api_key();
        ApiKey::from_setting(setting.as_deref())
            .map_err(|e| ApplicationError::Configuration(e.to_string()))
    }

    async fn resolve(
        &self,
        command: &str,
        location: &str,
    ) -> Result<ResolvedLocation, ApplicationError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(ApplicationError::InvalidCommand(usage(command)));
        }
        let resolved = self.locations.lookup_location(location).await?;
        info!(query = %location, resolved = %resolved.display_name, "Resolved location");
        Ok(resolved)
    }
}

fn usage(command: &str) -> String {
    format!(
        "Usage: {} - for example {}",
        highlight(format!("{command} <location>")),
        highlight(format!("{command} Hamburg"))
    )
}
