//! Logging configuration

use serde::{Deserialize, Serialize};

/// Logging configuration
///
/// The effective filter is `RUST_LOG` if set, else `log_filter`, else the
/// level derived from the CLI verbosity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryAppConfig {
    /// Filter directives, e.g. "oweather=debug,integration_weather=trace"
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}
