//! Weather provider API key value object

use std::fmt;

use crate::errors::DomainError;

/// Length of a valid OpenWeatherMap API key
pub const API_KEY_LENGTH: usize = 32;

/// A weather provider API key that passed the length check
///
/// The `Debug` implementation never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    value: String,
}

impl ApiKey {
    /// Validate a raw API key
    ///
    /// The key is used as-is; surrounding whitespace counts towards the length.
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let value = key.into();
        let len = value.chars().count();
        if len != API_KEY_LENGTH {
            return Err(DomainError::InvalidApiKey(format!(
                "expected {API_KEY_LENGTH} characters, got {len}"
            )));
        }
        Ok(Self { value })
    }

    /// Validate an optional setting value, treating `None` as missing
    pub fn from_setting(setting: Option<&str>) -> Result<Self, DomainError> {
        match setting {
            Some(key) => Self::new(key),
            None => Err(DomainError::InvalidApiKey("no API key set".to_string())),
        }
    }

    /// The raw key, for use as a request parameter
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey").finish_non_exhaustive()
    }
}
