//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::markup::highlight;
use crate::services::FormatError;

/// Reply for a missing or malformed API key
pub const INVALID_API_KEY_MESSAGE: &str = "There is either no API key or an invalid one was set.";

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Configuration error (missing or invalid API key)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// External service error (HTTP status, timeout, connection)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The provider answered with something that is not a usable record
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The provider answered with an API error message
    #[error("Provider rejected request: {0}")]
    ProviderRejected(String),

    /// The geocoder could not resolve the location query
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The command was malformed; carries the usage text
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// The text shown to the chat user for this error
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration(_) | Self::Domain(DomainError::InvalidApiKey(_)) => {
                INVALID_API_KEY_MESSAGE.to_string()
            },
            Self::Domain(e) => e.to_string(),
            Self::ExternalService(_) => "Error looking up the weather.".to_string(),
            Self::InvalidResponse(_) => "Error parsing weather data.".to_string(),
            Self::ProviderRejected(message) => {
                format!("Error looking up the weather: {}.", highlight(message))
            },
            Self::LocationNotFound(query) => {
                format!("Unable to find a location matching {}.", highlight(query))
            },
            Self::InvalidCommand(usage) => usage.clone(),
            Self::Internal(_) => "Error formatting the weather data.".to_string(),
        }
    }
}

impl From<FormatError> for ApplicationError {
    fn from(err: FormatError) -> Self {
        Self::Internal(err.to_string())
    }
}
