//! Port interfaces for location resolution
//!
//! These traits define the boundaries between the resolver and the
//! infrastructure that knows about postal codes and geocoding providers.

use async_trait::async_trait;
use linkup_domain::{GeocodeResult, PostalCodeEntry, Result};

/// Trait for free-text geocoding providers
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Geocode a free-text query; best candidates first, empty when unknown.
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>>;
}

/// Trait for the static postal-code lookup table
pub trait PostalCodeLookup: Send + Sync {
    /// Look up an exact postal code
    fn lookup(&self, code: &str) -> Option<PostalCodeEntry>;
}
