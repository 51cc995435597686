//! Weather formatting
//!
//! Pure functions turning weather records and a resolved location into
//! chat markup. This module is split into:
//! - [`helpers`]: derived values (directions, Beaufort names, conversions)
//! - [`current`]: the current-weather detail blob
//! - [`forecast`]: the per-day forecast blob

mod current;
mod forecast;
pub mod helpers;

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

pub use current::{current_summary, render_current};
pub use forecast::{forecast_title, render_forecast};

/// Errors raised while formatting weather records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A unix timestamp outside the representable range
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    /// A UTC offset of a day or more
    #[error("Invalid UTC offset: {0} seconds")]
    InvalidUtcOffset(i32),
}

/// Convert a UTC offset in seconds to a chrono offset
pub(crate) fn fixed_offset(seconds: i32) -> Result<FixedOffset, FormatError> {
    FixedOffset::east_opt(seconds).ok_or(FormatError::InvalidUtcOffset(seconds))
}

/// Convert a unix timestamp to local time at the given offset
pub(crate) fn local_time(
    timestamp: i64,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, FormatError> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|utc| utc.with_timezone(&offset))
        .ok_or(FormatError::InvalidTimestamp(timestamp))
}
