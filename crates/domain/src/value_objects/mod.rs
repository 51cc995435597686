//! Value Objects - Immutable, identity-less domain primitives

mod api_key;
mod coordinates;
mod resolved_location;

pub use api_key::{API_KEY_LENGTH, ApiKey};
pub use coordinates::Coordinates;
pub use resolved_location::ResolvedLocation;
