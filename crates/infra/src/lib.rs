//! # Linkup Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Retrying HTTP client
//! - Nominatim-compatible geocoder (`Geocoder` port)
//! - Static postal-code table (`PostalCodeLookup` port)
//! - In-memory live profile store (`ProfileStore`, `ProfileSnapshotSource`,
//!   `ProfileFeed` ports)
//! - Configuration loader
//!
//! ## Architecture
//! - Implements traits defined in `linkup-core`
//! - Contains all "impure" code (network, filesystem, environment)
//! - Foreign error types never cross the crate boundary

pub mod config;
pub mod errors;
pub mod geocoding;
pub mod http;
pub mod postal;
pub mod store;

// Re-export commonly used items
pub use errors::InfraError;
pub use geocoding::{GeocodingError, HttpGeocoder};
pub use http::{HttpClient, HttpClientBuilder};
pub use postal::PostalCodeTable;
pub use store::InMemoryProfileStore;
