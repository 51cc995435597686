//! Location lookup port
//!
//! Resolves free-text location queries to a named place with coordinates.

use async_trait::async_trait;
use domain::ResolvedLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding free-text locations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationPort: Send + Sync {
    /// Resolve a query such as "Hamburg" or "30629, de"
    ///
    /// Returns `ApplicationError::LocationNotFound` if nothing matches.
    async fn lookup_location(&self, query: &str) -> Result<ResolvedLocation, ApplicationError>;
}
