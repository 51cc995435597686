//! Current-weather rendering

use domain::{CurrentWeather, ResolvedLocation};

use super::helpers::{
    celsius_to_fahrenheit, degree_to_direction, format_lat_lon, format_thousands, hpa_to_inhg,
    meters_to_km, meters_to_miles, mps_to_kmh, mps_to_mph, osm_link, utc_offset_to_hhmm,
    wind_strength,
};
use super::{FormatError, fixed_offset, local_time};
use crate::markup::{highlight, make_chatcmd};

/// One-line summary for a current-weather reply
#[must_use]
pub fn current_summary(weather: &CurrentWeather, location: &ResolvedLocation) -> String {
    let description = weather
        .primary_condition()
        .map_or("unknown conditions", |w| w.description.as_str());
    format!(
        "The weather for {} is {} with {description}",
        highlight(&location.display_name),
        highlight(format!("{:.1}°C", weather.main.temp)),
    )
}

/// Render the current-weather detail blob
///
/// # Errors
///
/// Returns a [`FormatError`] if a timestamp or the UTC offset is out of range.
#[allow(clippy::cast_precision_loss)]
pub fn render_current(
    weather: &CurrentWeather,
    location: &ResolvedLocation,
) -> Result<String, FormatError> {
    let offset = fixed_offset(weather.utc_offset_seconds)?;
    let timezone = utc_offset_to_hhmm(weather.utc_offset_seconds);
    let last_updated = local_time(weather.timestamp_utc, fixed_offset(0)?)?
        .format("%d-%b-%Y %H:%M UTC")
        .to_string();
    let sunrise = local_time(weather.sunrise, offset)?
        .format("%H:%M:%S")
        .to_string();
    let sunset = local_time(weather.sunset, offset)?
        .format("%H:%M:%S")
        .to_string();

    let main = &weather.main;
    let description = weather
        .primary_condition()
        .map_or("unknown", |w| w.description.as_str());
    let map_command = make_chatcmd("OpenStreetMap", &format!("/start {}", osm_link(&weather.coord)));

    let mut blob = format!("Last Updated: {}\n\n", highlight(last_updated));
    blob.push_str(&format!("Location: {}\n", highlight(&location.display_name)));
    if let Some(population) = location.known_population() {
        blob.push_str(&format!("Population: {}\n", highlight(format_thousands(population))));
    }
    blob.push_str(&format!("Timezone: {}\n", highlight(format!("UTC{timezone}"))));
    blob.push_str(&format!(
        "Lat/Lon: {} {map_command}\n\n",
        highlight(format_lat_lon(&weather.coord))
    ));

    blob.push_str(&format!(
        "Currently: {} ({}), {}\n",
        highlight(format!("{:.1}°C", main.temp)),
        highlight(format!("{:.1}°F", celsius_to_fahrenheit(main.temp))),
        highlight(description),
    ));
    blob.push_str(&format!(
        "Feels like: {} ({})\n",
        highlight(format!("{:.1}°C", main.feels_like)),
        highlight(format!("{:.1}°F", celsius_to_fahrenheit(main.feels_like))),
    ));
    match weather.cloudiness() {
        Some(clouds) => blob.push_str(&format!("Clouds: {}\n", highlight(format!("{clouds}%")))),
        None => blob.push_str(&format!("Clouds: {}\n", highlight("clear sky"))),
    }
    blob.push_str(&format!("Humidity: {}\n", highlight(format!("{}%", main.humidity))));
    if let Some(visibility) = weather.known_visibility() {
        let meters = visibility as f64;
        blob.push_str(&format!(
            "Visibility: {} ({})\n",
            highlight(format!("{:.1} km", meters_to_km(meters))),
            highlight(format!("{:.1} miles", meters_to_miles(meters))),
        ));
    }
    blob.push_str(&format!(
        "Pressure: {} ({})\n",
        highlight(format!("{} hPa", main.pressure)),
        highlight(format!("{:.2}\" Hg", hpa_to_inhg(main.pressure as f64))),
    ));
    blob.push_str(&format!(
        "Wind: {} - {} from the {}\n\n",
        highlight(wind_strength(weather.wind.speed)),
        highlight(format!(
            "{:.1} km/h ({:.1} mph)",
            mps_to_kmh(weather.wind.speed),
            mps_to_mph(weather.wind.speed)
        )),
        highlight(degree_to_direction(weather.wind.degree)),
    ));

    blob.push_str(&format!("Sunrise: {}\n", highlight(format!("{sunrise} UTC{timezone}"))));
    blob.push_str(&format!("Sunset: {}\n\n", highlight(format!("{sunset} UTC{timezone}"))));
    blob.push_str(&make_chatcmd(
        "Forecast for the next 3 days",
        &format!("/tell <myname> forecast {}", location.display_name),
    ));

    Ok(blob)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use domain::{Coordinates, ShortWeather, TempData, Wind};

    use super::*;

    fn sample_weather() -> CurrentWeather {
        CurrentWeather {
            coord: Coordinates::new_unchecked(53.55, 9.99),
            main: TempData {
                temp: 7.42,
                feels_like: 4.9,
                temp_min: 6.6,
                temp_max: 8.3,
                pressure: 1008,
                humidity: 93,
            },
            weather: vec![
                ShortWeather {
                    id: 500,
                    main: "Rain".to_string(),
                    description: "light rain".to_string(),
                    icon: "10n".to_string(),
                },
                ShortWeather {
                    id: 701,
                    main: "Mist".to_string(),
                    description: "mist".to_string(),
                    icon: "50n".to_string(),
                },
            ],
            wind: Wind {
                speed: 4.63,
                degree: 240,
                gust: None,
            },
            clouds: BTreeMap::from([("all".to_string(), 100)]),
            visibility: Some(6000),
            timestamp_utc: 1_700_000_000,
            sunrise: 1_699_944_000,
            sunset: 1_699_975_000,
            utc_offset_seconds: 3600,
            location_name: "Hamburg".to_string(),
            country_code: "DE".to_string(),
        }
    }

    fn sample_location() -> ResolvedLocation {
        let mut location = ResolvedLocation::new("Hamburg, Germany", 53.55, 9.99);
        location.population = Some(1_841_179.0);
        location
    }

    #[test]
    fn summary_line() {
        assert_eq!(
            current_summary(&sample_weather(), &sample_location()),
            "The weather for <highlight>Hamburg, Germany<end> is <highlight>7.4°C<end> with light rain"
        );
    }

    #[test]
    fn renders_header() {
        let blob = render_current(&sample_weather(), &sample_location()).unwrap();
        assert!(blob.starts_with("Last Updated: <highlight>14-Nov-2023 22:13 UTC<end>\n\n"));
        assert!(blob.contains("Location: <highlight>Hamburg, Germany<end>\n"));
        assert!(blob.contains("Population: <highlight>1,841,179<end>\n"));
        assert!(blob.contains("Timezone: <highlight>UTC+01:00<end>\n"));
        assert!(blob.contains(
            "Lat/Lon: <highlight>N53.55° E9.99°<end> \
             <a href='chatcmd:///start https://www.openstreetmap.org/#map=12/53.5500/9.9900'>OpenStreetMap</a>\n"
        ));
    }

    #[test]
    fn renders_measurements_with_conversions() {
        let blob = render_current(&sample_weather(), &sample_location()).unwrap();
        assert!(blob.contains(
            "Currently: <highlight>7.4°C<end> (<highlight>45.4°F<end>), <highlight>light rain<end>\n"
        ));
        assert!(blob.contains("Feels like: <highlight>4.9°C<end> (<highlight>40.8°F<end>)\n"));
        assert!(blob.contains("Clouds: <highlight>100%<end>\n"));
        assert!(blob.contains("Humidity: <highlight>93%<end>\n"));
        assert!(blob.contains(
            "Visibility: <highlight>6.0 km<end> (<highlight>3.7 miles<end>)\n"
        ));
        assert!(blob.contains(
            "Pressure: <highlight>1008 hPa<end> (<highlight>29.77\" Hg<end>)\n"
        ));
        assert!(blob.contains(
            "Wind: <highlight>gentle breeze<end> - <highlight>16.7 km/h (10.4 mph)<end> from the <highlight>WSW<end>\n"
        ));
    }

    #[test]
    fn renders_sun_times_in_local_time() {
        let blob = render_current(&sample_weather(), &sample_location()).unwrap();
        assert!(blob.contains("Sunrise: <highlight>07:40:00 UTC+01:00<end>\n"));
        assert!(blob.contains("Sunset: <highlight>16:16:40 UTC+01:00<end>\n"));
    }

    #[test]
    fn ends_with_forecast_link() {
        let blob = render_current(&sample_weather(), &sample_location()).unwrap();
        assert!(blob.ends_with(
            "<a href='chatcmd:///tell <myname> forecast Hamburg, Germany'>Forecast for the next 3 days</a>"
        ));
    }

    #[test]
    fn forecast_link_survives_quotes_in_name() {
        let location = ResolvedLocation::new("Côte d'Ivoire", 7.54, -5.55);
        let blob = render_current(&sample_weather(), &location).unwrap();
        assert!(blob.ends_with(
            "<a href='chatcmd:///tell <myname> forecast Côte d&#39;Ivoire'>Forecast for the next 3 days</a>"
        ));
    }

    #[test]
    fn optional_fields_are_omitted() {
        let mut weather = sample_weather();
        weather.visibility = None;
        weather.clouds.clear();
        let location = ResolvedLocation::new("Hamburg", 53.55, 9.99);

        let blob = render_current(&weather, &location).unwrap();
        assert!(!blob.contains("Visibility:"));
        assert!(!blob.contains("Population:"));
        assert!(blob.contains("Clouds: <highlight>clear sky<end>\n"));
    }

    #[test]
    fn zero_visibility_is_omitted() {
        let mut weather = sample_weather();
        weather.visibility = Some(0);
        let blob = render_current(&weather, &sample_location()).unwrap();
        assert!(!blob.contains("Visibility:"));
    }

    #[test]
    fn invalid_offset_is_an_error() {
        let mut weather = sample_weather();
        weather.utc_offset_seconds = 90_000;
        assert_eq!(
            render_current(&weather, &sample_location()),
            Err(FormatError::InvalidUtcOffset(90_000))
        );
    }

    #[test]
    fn invalid_timestamp_is_an_error() {
        let mut weather = sample_weather();
        weather.sunset = i64::MAX;
        assert_eq!(
            render_current(&weather, &sample_location()),
            Err(FormatError::InvalidTimestamp(i64::MAX))
        );
    }
}
