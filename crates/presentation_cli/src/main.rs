//! OWeather CLI
//!
//! Runs the weather chat commands from a terminal.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{CommandParser, CommandReply, WeatherCommandService};
use clap::{Parser, Subcommand};
use domain::BotCommand;
use infrastructure::{
    AppConfig, ConfigSettingsAdapter, GeocodingAdapter, WeatherAdapter, init_telemetry,
};
use tracing::debug;

/// OWeather CLI
#[derive(Parser)]
#[command(name = "oweather-cli")]
#[command(author, version, about = "OpenWeatherMap chat commands", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "OWEATHER_CONFIG")]
    config: Option<PathBuf>,

    /// Print the reply as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current weather for a location
    ///
    /// Example: oweather-cli weather Hamburg, US
    #[command(alias = "oweather")]
    Weather {
        /// Place name, optionally followed by a country code, or "zip, cc"
        #[arg(required = true, num_args = 1..)]
        location: Vec<String>,
    },

    /// Show the 3-hourly forecast for the next days
    Forecast {
        /// Place name, optionally followed by a country code, or "zip, cc"
        #[arg(required = true, num_args = 1..)]
        location: Vec<String>,
    },

    /// Run a raw chat line, e.g. "!forecast 30629, de"
    Command {
        /// Chat line
        input: String,
    },
}

impl Commands {
    /// Translate to a bot command; `None` if a chat line is not recognised
    fn to_bot_command(&self, parser: &CommandParser) -> Option<BotCommand> {
        match self {
            Self::Weather { location } => Some(BotCommand::CurrentWeather {
                location: location.join(" "),
            }),
            Self::Forecast { location } => Some(BotCommand::Forecast {
                location: location.join(" "),
            }),
            Self::Command { input } => parser.parse(input),
        }
    }
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_service(config: &AppConfig) -> anyhow::Result<WeatherCommandService> {
    let weather = WeatherAdapter::with_config((&config.weather).into())
        .context("Failed to create weather client")?;
    let locations =
        GeocodingAdapter::new(&config.geocoding).context("Failed to create geocoding client")?;
    let settings = ConfigSettingsAdapter::from_config(config);

    Ok(WeatherCommandService::new(
        Arc::new(weather),
        Arc::new(locations),
        Arc::new(settings),
    ))
}

fn render(reply: &CommandReply, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(reply)?)
    } else {
        Ok(reply.to_string())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref())?;
    init_telemetry(&config.telemetry, log_filter_from_verbosity(cli.verbose))?;

    let parser = CommandParser::new();
    let Some(command) = cli.command.to_bot_command(&parser) else {
        let reply = CommandReply::text(format!(
            "Unknown command. Known commands: {}",
            parser.keywords().join(", ")
        ));
        println!("{}", render(&reply, cli.json)?);
        return Ok(());
    };
    debug!(command = %command.description(), "Executing command");

    let service = build_service(&config)?;
    let reply = service.handle(&command).await;
    println!("{}", render(&reply, cli.json)?);

    Ok(())
}
