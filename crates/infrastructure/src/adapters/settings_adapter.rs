//! Settings adapter - Implements SettingsPort from the loaded configuration

use application::ports::SettingsPort;
use secrecy::{ExposeSecret, SecretString};

use crate::config::AppConfig;

/// Serves plugin settings from [`AppConfig`]
#[derive(Debug, Clone, Default)]
pub struct ConfigSettingsAdapter {
    api_key: Option<SecretString>,
}

impl ConfigSettingsAdapter {
    /// Create from an optional API key
    #[must_use]
    pub const fn new(api_key: Option<SecretString>) -> Self {
        Self { api_key }
    }

    /// Create from the application configuration
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.weather.api_key.clone())
    }
}

impl SettingsPort for ConfigSettingsAdapter {
    fn weather_api_key(&self) -> Option<String> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret().to_string())
    }
}
