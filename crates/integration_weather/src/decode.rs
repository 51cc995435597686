//! JSON decoding of OpenWeatherMap payloads
//!
//! Decoding either yields a complete domain record or a [`DecodeError`];
//! partially filled records are never returned.

use domain::{CurrentWeather, Forecast};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::{CurrentResponse, ForecastResponse};

/// Errors produced while decoding a provider payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The body is not syntactically valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// The body is an API error object (`cod` != 200 with a `message`)
    #[error("API error {code}: {message}")]
    Api {
        /// Provider status code from the `cod` field
        code: i64,
        /// Provider error message, shown to the user verbatim
        message: String,
    },

    /// Valid JSON that does not have the expected structure
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/// Decode a `GET /weather` response body
///
/// # Errors
///
/// Returns a [`DecodeError`] if the body is not JSON, is an API error
/// object, or lacks required fields.
pub fn decode_current(body: &str) -> Result<CurrentWeather, DecodeError> {
    let raw: CurrentResponse = decode_as(body)?;
    if raw.weather.is_empty() {
        return Err(DecodeError::UnexpectedShape(
            "empty weather list".to_string(),
        ));
    }
    Ok(raw.into())
}

/// Decode a `GET /forecast` response body
///
/// Steps are returned in ascending timestamp order.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the body is not JSON, is an API error
/// object, lacks required fields, or any step has an empty weather list.
pub fn decode_forecast(body: &str) -> Result<Forecast, DecodeError> {
    let raw: ForecastResponse = decode_as(body)?;
    if let Some(step) = raw.list.iter().find(|s| s.weather.is_empty()) {
        return Err(DecodeError::UnexpectedShape(format!(
            "empty weather list in step {}",
            step.dt
        )));
    }
    Ok(raw.into())
}

/// Extract an API error from a body, if it is one
///
/// An API error is a JSON object whose `cod` (number or numeric string)
/// differs from 200 and which carries a non-null `message`.
#[must_use]
pub fn api_error(body: &str) -> Option<DecodeError> {
    let value: Value = serde_json::from_str(body).ok()?;
    api_error_from_value(&value)
}

fn decode_as<T: DeserializeOwned>(body: &str) -> Result<T, DecodeError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;

    // The shape check runs first; a payload is only treated as an API error
    // once it failed to decode as the expected record.
    match serde_json::from_value::<T>(value.clone()) {
        Ok(record) => Ok(record),
        Err(e) => Err(api_error_from_value(&value)
            .unwrap_or_else(|| DecodeError::UnexpectedShape(e.to_string()))),
    }
}

fn api_error_from_value(value: &Value) -> Option<DecodeError> {
    let object = value.as_object()?;
    let code = match object.get("cod")? {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    if code == 200 {
        return None;
    }
    let message = match object.get("message")? {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Some(DecodeError::Api { code, message })
}
