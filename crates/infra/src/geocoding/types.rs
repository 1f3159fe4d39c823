use std::time::Duration;

use linkup_domain::{GeocodeResult, LinkupError};
use serde::Deserialize;

/// Geocoding adapter failures
#[derive(Debug, thiserror::Error)]
pub enum GeocodingError {
    /// Transport failure after retries (connection refused, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Provider answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Body did not match the search response shape
    #[error("Invalid response payload: {0}")]
    InvalidPayload(String),

    #[error("Geocoding timed out after {0:?}")]
    Timeout(Duration),
}

impl From<GeocodingError> for LinkupError {
    fn from(value: GeocodingError) -> Self {
        match value {
            GeocodingError::Network(msg) => LinkupError::Network(msg),
            other => LinkupError::Geocoding(other.to_string()),
        }
    }
}

/// One place in a `format=jsonv2` search response.
///
/// Nominatim encodes coordinates as strings.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<SearchAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SearchAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub hamlet: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country_code: Option<String>,
}

impl SearchPlace {
    /// Convert to the domain shape.
    ///
    /// Fails with `InvalidPayload` when either coordinate is unusable.
    pub(crate) fn into_result(self) -> Result<GeocodeResult, GeocodingError> {
        let lat = parse_coordinate(&self.lat, "lat")?;
        let lng = parse_coordinate(&self.lon, "lon")?;
        let address = self.address.unwrap_or_default();

        Ok(GeocodeResult {
            lat,
            lng,
            name: non_empty(self.name),
            city: non_empty(address.city.or(address.town).or(address.village).or(address.hamlet)),
            region: non_empty(address.state),
            postal_code: non_empty(address.postcode),
            iso_country_code: non_empty(address.country_code.map(|c| c.to_ascii_uppercase())),
        })
    }
}

fn parse_coordinate(raw: &str, field: &str) -> Result<f64, GeocodingError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodingError::InvalidPayload(format!("{field} is not a number: {raw:?}")))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
