//! Integration tests for CLI
//!
//! The first half checks argument parsing against a mirror of the CLI
//! structure; the second half runs the built binary for paths that need no
//! network access.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use clap::Parser;

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "oweather-cli")]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    #[command(alias = "oweather")]
    Weather {
        #[arg(required = true, num_args = 1..)]
        location: Vec<String>,
    },
    Forecast {
        #[arg(required = true, num_args = 1..)]
        location: Vec<String>,
    },
    Command {
        input: String,
    },
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

// ============================================================================
// Argument parsing
// ============================================================================

#[test]
fn cli_parses_weather_command() {
    let cli = parse_args(&["oweather-cli", "weather", "Hamburg"]).unwrap();
    if let Commands::Weather { location } = cli.command {
        assert_eq!(location, vec!["Hamburg"]);
    } else {
        panic!("Expected Weather command");
    }
}

#[test]
fn cli_parses_multi_word_forecast() {
    let cli = parse_args(&["oweather-cli", "forecast", "30629,", "de"]).unwrap();
    if let Commands::Forecast { location } = cli.command {
        assert_eq!(location.join(" "), "30629, de");
    } else {
        panic!("Expected Forecast command");
    }
}

#[test]
fn cli_parses_command_command() {
    let cli = parse_args(&["oweather-cli", "command", "!weather Hamburg"]).unwrap();
    if let Commands::Command { input } = cli.command {
        assert_eq!(input, "!weather Hamburg");
    } else {
        panic!("Expected Command command");
    }
}

#[test]
fn cli_parses_config_and_json_flags() {
    let cli = parse_args(&[
        "oweather-cli",
        "--config",
        "/etc/oweather.toml",
        "--json",
        "weather",
        "Hamburg",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/etc/oweather.toml")));
    assert!(cli.json);
}

#[test]
fn cli_parses_multiple_verbose_flags() {
    let cli = parse_args(&["oweather-cli", "-vvv", "weather", "Hamburg"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["oweather-cli"]).is_err());
}

#[test]
fn cli_forecast_requires_location() {
    assert!(parse_args(&["oweather-cli", "forecast"]).is_err());
}

// ============================================================================
// Binary
// ============================================================================

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(config: &tempfile::NamedTempFile, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_oweather-cli"))
        .arg("--config")
        .arg(config.path())
        .args(args)
        .env_remove("OWEATHER_WEATHER__API_KEY")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn missing_api_key_is_reported_without_network() {
    let config = config_file("[weather]\nbase_url = \"http://127.0.0.1:9\"\n");
    let output = run(&config, &["weather", "Hamburg"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "There is either no API key or an invalid one was set."
    );
}

#[test]
fn short_api_key_is_rejected() {
    let config = config_file("[weather]\napi_key = \"short\"\n");
    let output = run(&config, &["forecast", "Hamburg"]);

    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "There is either no API key or an invalid one was set."
    );
}

#[test]
fn unknown_chat_line() {
    let config = config_file("");
    let output = run(&config, &["command", "dance"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Unknown command. Known commands: "));
    assert!(stdout.contains("forecast"));
}

#[test]
fn help_as_json() {
    let config = config_file("");
    let output = run(&config, &["--json", "command", "help"]);

    let reply: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reply["summary"], "Weather Help");
    assert!(
        reply["blob"]["body"]
            .as_str()
            .unwrap()
            .contains("forecast 30629, de")
    );
}

#[test]
fn invalid_config_fails() {
    let config = config_file("[weather]\nforecast_steps = 0\n");
    let output = run(&config, &["weather", "Hamburg"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("weather.forecast_steps"));
}
