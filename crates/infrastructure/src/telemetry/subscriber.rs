//! Subscriber setup

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TelemetryAppConfig;

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The filter directives could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    Filter {
        /// Offending directives
        filter: String,
        /// Parser message
        reason: String,
    },

    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Pick the filter directives: `RUST_LOG`, then the configured filter, then the fallback
#[must_use]
pub fn resolve_filter(env_value: Option<&str>, configured: Option<&str>, fallback: &str) -> String {
    [env_value, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Initialize the global tracing subscriber
///
/// `fallback_filter` is used when neither `RUST_LOG` nor the configuration
/// provides directives. Fails if a subscriber is already installed.
pub fn init_telemetry(
    config: &TelemetryAppConfig,
    fallback_filter: &str,
) -> Result<(), TelemetryError> {
    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = resolve_filter(
        env_value.as_deref(),
        config.log_filter.as_deref(),
        fallback_filter,
    );
    let env_filter = EnvFilter::try_new(&directives).map_err(|e| TelemetryError::Filter {
        filter: directives.clone(),
        reason: e.to_string(),
    })?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    installed.map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(filter = %directives, json = config.json, "Logging initialized");
    Ok(())
}
