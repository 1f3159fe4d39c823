//! Locations attached to slots and profiles

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RADIUS_MILES;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Build coordinates when both components are finite and within range.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        valid.then_some(Self { lat, lng })
    }
}

/// Resolved (or best-effort) location of a slot.
///
/// When both `lat` and `lng` are present they take precedence over
/// `postal_code` for distance checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// What the user typed
    pub query: String,
    /// Human-readable name; equals `query` when resolution failed
    pub label: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    pub radius_miles: f64,
}

impl Location {
    /// Location that could not be resolved to coordinates.
    pub fn unresolved(query: impl Into<String>, radius_miles: f64) -> Self {
        let query = query.into();
        Self {
            label: query.clone(),
            query,
            postal_code: None,
            lat: None,
            lng: None,
            radius_miles,
        }
    }

    /// Coordinates, only when both components are present and valid.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Coordinates::new(lat, lng),
            _ => None,
        }
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.lat = Some(coordinates.lat);
        self.lng = Some(coordinates.lng);
        self
    }

    /// Non-empty postal code, if any.
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref().filter(|code| !code.is_empty())
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::unresolved("", DEFAULT_RADIUS_MILES)
    }
}

/// Location reference as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLocation {
    pub query: Option<String>,
    pub label: Option<String>,
    pub postal_code: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius_miles: Option<f64>,
}

impl RawLocation {
    /// Free-text reference to resolve: query first, then label, then postal code.
    pub fn reference(&self) -> &str {
        [&self.query, &self.label, &self.postal_code]
            .into_iter()
            .filter_map(|value| value.as_deref().map(str::trim))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    /// Coordinates supplied by the caller, if both are present and valid.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Coordinates::new(lat, lng),
            _ => None,
        }
    }
}

impl From<&Location> for RawLocation {
    fn from(location: &Location) -> Self {
        Self {
            query: Some(location.query.clone()),
            label: Some(location.label.clone()),
            postal_code: location.postal_code.clone(),
            lat: location.lat,
            lng: location.lng,
            radius_miles: Some(location.radius_miles),
        }
    }
}

/// One candidate returned by a geocoding provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lng: f64,
    pub name: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub iso_country_code: Option<String>,
}

impl GeocodeResult {
    /// Comma-separated label from the non-empty locality, region and country.
    pub fn display_label(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.city, &self.region, &self.iso_country_code]
            .into_iter()
            .filter_map(|part| part.as_deref().map(str::trim))
            .filter(|part| !part.is_empty())
            .collect();

        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

/// Entry of the static postal-code lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostalCodeEntry {
    pub code: String,
    pub lat: f64,
    pub lng: f64,
    pub city: String,
    pub state: String,
}

impl PostalCodeEntry {
    pub fn label(&self) -> String {
        match (self.city.trim(), self.state.trim()) {
            ("", "") => self.code.clone(),
            (city, "") => city.to_string(),
            ("", state) => state.to_string(),
            (city, state) => format!("{city}, {state}"),
        }
    }
}
