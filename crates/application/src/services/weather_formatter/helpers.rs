//! Derived-value helpers for weather rendering
//!
//! Pure functions: compass directions, Beaufort wind names, padded
//! temperatures, unit conversions and map links.

use domain::Coordinates;

/// Compass points by degree, checked in ascending order
const COMPASS: [(i32, &str); 17] = [
    (0, "N"),
    (22, "NNE"),
    (45, "NE"),
    (67, "ENE"),
    (90, "E"),
    (112, "ESE"),
    (135, "SE"),
    (157, "SSE"),
    (180, "S"),
    (202, "SSW"),
    (225, "SW"),
    (247, "WSW"),
    (270, "W"),
    (292, "WNW"),
    (315, "NW"),
    (337, "NNW"),
    (360, "N"),
];

/// Beaufort scale, lower bound in m/s, strongest first
const BEAUFORT: [(f64, &str); 13] = [
    (32.7, "hurricane"),
    (28.5, "violent storm"),
    (24.5, "storm"),
    (20.8, "strong gale"),
    (17.2, "gale"),
    (13.9, "high wind"),
    (10.8, "strong breeze"),
    (8.0, "fresh breeze"),
    (5.5, "moderate breeze"),
    (3.4, "gentle breeze"),
    (1.6, "light breeze"),
    (0.5, "light air"),
    (0.0, "calm"),
];

/// Meters per statute mile
const METERS_PER_MILE: f64 = 1609.3;

/// Inches of mercury per hectopascal
const INHG_PER_HPA: f64 = 0.029_529_97;

/// Zoom level of generated map links (1 to 20)
const MAP_ZOOM: u8 = 12;

/// Nearest compass direction for a wind degree
///
/// On a tie the lower table entry wins. Degrees 360 or more away from every
/// table point yield "unknown".
#[must_use]
pub fn degree_to_direction(degree: i32) -> &'static str {
    let mut current = "unknown";
    let mut current_diff = 360;
    for (point, name) in COMPASS {
        let diff = (degree - point).abs();
        if diff < current_diff {
            current = name;
            current_diff = diff;
        }
    }
    current
}

/// Beaufort name for a wind speed in m/s
#[must_use]
pub fn wind_strength(speed: f64) -> &'static str {
    BEAUFORT
        .iter()
        .find(|(threshold, _)| speed >= *threshold)
        .map_or("unknown", |(_, name)| name)
}

/// Split a temperature into an invisible fill and the visible digits
///
/// `fill + digits` has the same width for every |t| < 100, so columns of
/// temperatures line up when the fill is rendered in black. Only values
/// strictly above zero take the positive layout, so `0.0` renders as `-0.0`.
#[must_use]
pub fn format_celsius(degrees: f64) -> (&'static str, String) {
    let magnitude = format!("{:.1}", degrees.abs());
    match (magnitude.len() == 3, degrees > 0.0) {
        (true, true) => ("-_", magnitude),
        (true, false) => ("_", format!("-{magnitude}")),
        (false, true) => ("-", magnitude),
        (false, false) => ("", format!("-{magnitude}")),
    }
}

/// OpenStreetMap link centred on the coordinates
#[must_use]
pub fn osm_link(coords: &Coordinates) -> String {
    format!(
        "https://www.openstreetmap.org/#map={MAP_ZOOM}/{:.4}/{:.4}",
        coords.lat, coords.lon
    )
}

/// Render a UTC offset in seconds as `+HH:MM` / `-HH:MM`
#[must_use]
pub fn utc_offset_to_hhmm(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    let hours = (abs / 3600) % 24;
    let minutes = (abs % 3600) / 60;
    format!("{sign}{hours:02}:{minutes:02}")
}

/// Render coordinates with hemisphere letters, e.g. `N52.52° E13.41°`
#[must_use]
pub fn format_lat_lon(coords: &Coordinates) -> String {
    format!("{}° {}°", coords.latitude_label(), coords.longitude_label())
}

/// Round to an integer and group thousands with commas
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Degrees Celsius to degrees Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius.mul_add(1.8, 32.0)
}

/// Hectopascal to inches of mercury
#[must_use]
pub fn hpa_to_inhg(hpa: f64) -> f64 {
    hpa * INHG_PER_HPA
}

/// Meters per second to kilometers per hour
#[must_use]
pub fn mps_to_kmh(speed: f64) -> f64 {
    speed * 3600.0 / 1000.0
}

/// Meters per second to miles per hour
#[must_use]
pub fn mps_to_mph(speed: f64) -> f64 {
    speed * 3600.0 / METERS_PER_MILE
}

/// Meters to kilometers
#[must_use]
pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

/// Meters to statute miles
#[must_use]
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}
