//! Location resolution domain

pub mod ports;
pub mod resolver;

pub use ports::{Geocoder, PostalCodeLookup};
pub use resolver::{
    is_postal_code, GeocoderTier, KnownCoordinatesTier, LocationResolver, PostalCodeTier,
    ResolutionTier,
};
