//! Nominatim geocoding integration
//!
//! Resolves free-text location queries ("Hamburg", "30629, de") to a
//! [`domain::ResolvedLocation`] using the OpenStreetMap Nominatim API.

mod client;

pub use client::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
