//! Forecast rendering
//!
//! Steps are grouped per local calendar day. A trailing day with fewer than
//! [`STEPS_PER_DAY`] steps is dropped.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use domain::{Forecast, ForecastStep, ResolvedLocation, STEPS_PER_DAY};

use super::helpers::{format_celsius, format_lat_lon, format_thousands, osm_link, utc_offset_to_hhmm};
use super::{FormatError, fixed_offset, local_time};
use crate::markup::{TAB, black, header2, highlight, make_chatcmd};

/// Line shown when the provider returned no steps
const NO_FORECAST: &str = "Currently, there is no weather forecast available.";

/// Title (and summary) of a forecast reply
#[must_use]
pub fn forecast_title(location: &ResolvedLocation) -> String {
    format!("Weather forecast for {}", location.display_name)
}

/// Render the forecast blob
///
/// `now` determines the "Local time" header line.
///
/// # Errors
///
/// Returns a [`FormatError`] if a timestamp or the UTC offset is out of range.
pub fn render_forecast(
    forecast: &Forecast,
    location: &ResolvedLocation,
    now: DateTime<Utc>,
) -> Result<String, FormatError> {
    let offset_secs = forecast.city.utc_offset_seconds;
    let offset = fixed_offset(offset_secs)?;
    let timezone = utc_offset_to_hhmm(offset_secs);
    let coords = &forecast.city.coord;
    let map_command = make_chatcmd("OpenStreetMap", &format!("/start {}", osm_link(coords)));

    let mut blob = format!("Location: {}\n", highlight(&location.display_name));
    blob.push_str(&format!("Timezone: {}\n", highlight(format!("UTC{timezone}"))));
    blob.push_str(&format!(
        "Lat/Lon: {} {map_command}\n",
        highlight(format_lat_lon(coords))
    ));
    if let Some(population) = population(forecast, location) {
        blob.push_str(&format!("Population: {}\n", highlight(format_thousands(population))));
    }
    blob.push_str(&format!(
        "Local time: {}\n",
        highlight(now.with_timezone(&offset).format("%A, %H:%M:%S"))
    ));
    blob.push_str(&format!("\nAll times are UTC{timezone}.\n"));

    if forecast.is_empty() {
        blob.push('\n');
        blob.push_str(NO_FORECAST);
        return Ok(blob);
    }

    let mut days = group_by_local_day(&forecast.steps, offset)?;
    if days.last().is_some_and(|(_, steps)| steps.len() < STEPS_PER_DAY) {
        days.pop();
    }

    for (day, steps) in &days {
        blob.push_str(&format!("\n{}\n", header2(day.format("%A"))));
        for (local, step) in steps {
            blob.push_str(&render_step(*local, step));
        }
    }

    Ok(blob)
}

/// Population of the forecast location: the geocoder's value, else the provider's
#[allow(clippy::cast_precision_loss)]
fn population(forecast: &Forecast, location: &ResolvedLocation) -> Option<f64> {
    location
        .known_population()
        .or_else(|| (forecast.city.population > 0).then(|| forecast.city.population as f64))
}

type DayBucket<'a> = (NaiveDate, Vec<(DateTime<FixedOffset>, &'a ForecastStep)>);

fn group_by_local_day(
    steps: &[ForecastStep],
    offset: FixedOffset,
) -> Result<Vec<DayBucket<'_>>, FormatError> {
    let mut days: Vec<DayBucket<'_>> = Vec::new();
    for step in steps {
        let local = local_time(step.timestamp_utc, offset)?;
        let date = local.date_naive();
        if let Some((day, bucket)) = days.last_mut() {
            if *day == date {
                bucket.push((local, step));
                continue;
            }
        }
        days.push((date, vec![(local, step)]));
    }
    Ok(days)
}

fn render_step(local: DateTime<FixedOffset>, step: &ForecastStep) -> String {
    let (temp_fill, temp) = format_celsius(step.main.temp);
    let (feels_fill, feels) = format_celsius(step.main.feels_like);

    let mut line = format!(
        "{TAB}{}: {}{}, feels like {}{}",
        local.format("%H:%M"),
        black(temp_fill),
        highlight(format!("{temp}°C")),
        black(feels_fill),
        highlight(format!("{feels}°C")),
    );

    if let Some(clouds) = step.cloudiness() {
        let fill = if clouds < 10 {
            "00"
        } else if clouds < 100 {
            "0"
        } else {
            ""
        };
        line.push_str(&format!(
            ", {}{} clouds",
            black(fill),
            highlight(format!("{clouds}%"))
        ));
    }

    if let Some(rain) = step.rain_last_3h {
        let amount = format!("{rain:.1}");
        let fill = if amount.len() < 4 { "0" } else { "" };
        line.push_str(&format!(
            ", {}{} rain",
            black(fill),
            highlight(format!("{amount}mm"))
        ));
    }

    line.push('\n');
    line
}
