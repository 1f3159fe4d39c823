//! Free-text geocoding over a Nominatim-compatible search API
//!
//! - **Client**: `HttpGeocoder` implements the core `Geocoder` port on top of
//!   the retrying `HttpClient`.
//! - **Types**: wire format of the `jsonv2` search response and the typed
//!   `GeocodingError`.
//!
//! Failures are returned as errors; the location resolver decides how to
//! degrade.

pub mod client;
pub mod types;

pub use client::HttpGeocoder;
pub use types::GeocodingError;
