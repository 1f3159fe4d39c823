//! Tiered location resolution
//!
//! A [`LocationResolver`] walks an ordered chain of [`ResolutionTier`]s and
//! stops at the first one that produces a location. The standard chain is
//! known coordinates, then the postal-code table, then the geocoder. When
//! every tier declines the location is returned unresolved: the slot can
//! still be saved, it just cannot be matched by distance.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use linkup_domain::constants::{DEFAULT_GEOCODER_TIMEOUT_MS, POSTAL_CODE_LENGTH};
use linkup_domain::{Coordinates, Location, RawLocation};
use tracing::{debug, warn};

use super::ports::{Geocoder, PostalCodeLookup};
use crate::slots::{SlotDefaults, SlotNormalizer};

/// One step of the resolution chain.
#[async_trait]
pub trait ResolutionTier: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Try to resolve `base` (the normalized, unresolved location built from
    /// `raw`). `None` hands over to the next tier.
    async fn resolve(&self, raw: &RawLocation, base: &Location) -> Option<Location>;
}

/// Keeps coordinates the caller already supplied.
#[derive(Debug, Default, Clone, Copy)]
pub struct KnownCoordinatesTier;

#[async_trait]
impl ResolutionTier for KnownCoordinatesTier {
    fn name(&self) -> &'static str {
        "known_coordinates"
    }

    async fn resolve(&self, _raw: &RawLocation, base: &Location) -> Option<Location> {
        base.coordinates().map(|_| base.clone())
    }
}

/// Resolves five-digit postal codes from a static table.
pub struct PostalCodeTier {
    lookup: Arc<dyn PostalCodeLookup>,
}

impl PostalCodeTier {
    pub fn new(lookup: Arc<dyn PostalCodeLookup>) -> Self {
        Self { lookup }
    }
}

/// `true` for exactly five ASCII digits.
pub fn is_postal_code(value: &str) -> bool {
    value.len() == POSTAL_CODE_LENGTH && value.bytes().all(|b| b.is_ascii_digit())
}

#[async_trait]
impl ResolutionTier for PostalCodeTier {
    fn name(&self) -> &'static str {
        "postal_code_table"
    }

    async fn resolve(&self, raw: &RawLocation, base: &Location) -> Option<Location> {
        let code = raw.reference();
        if !is_postal_code(code) {
            return None;
        }

        let entry = self.lookup.lookup(code)?;
        let coordinates = Coordinates::new(entry.lat, entry.lng)?;

        let mut location = base.clone().with_coordinates(coordinates);
        location.label = entry.label();
        location.postal_code = Some(entry.code);
        Some(location)
    }
}

/// Resolves free text through an external geocoder, bounded by a timeout.
///
/// Provider errors, timeouts and empty results are logged and treated as
/// "no answer"; they never reach the caller.
pub struct GeocoderTier {
    geocoder: Arc<dyn Geocoder>,
    timeout: Duration,
}

impl GeocoderTier {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self { geocoder, timeout: Duration::from_millis(DEFAULT_GEOCODER_TIMEOUT_MS) }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ResolutionTier for GeocoderTier {
    fn name(&self) -> &'static str {
        "geocoder"
    }

    async fn resolve(&self, raw: &RawLocation, base: &Location) -> Option<Location> {
        let query = raw.reference();
        if query.is_empty() {
            return None;
        }

        let results = match tokio::time::timeout(self.timeout, self.geocoder.geocode(query)).await
        {
            Ok(Ok(results)) => results,
            Ok(Err(err)) => {
                warn!(query, error = %err, "geocoding failed; keeping location unresolved");
                return None;
            }
            Err(_) => {
                warn!(
                    query,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "geocoding timed out; keeping location unresolved"
                );
                return None;
            }
        };

        let Some(first) = results.into_iter().next() else {
            warn!(query, "geocoder returned no results; keeping location unresolved");
            return None;
        };

        let Some(coordinates) = Coordinates::new(first.lat, first.lng) else {
            warn!(query, lat = first.lat, lng = first.lng, "geocoder returned invalid coordinates");
            return None;
        };

        let mut location = base.clone().with_coordinates(coordinates);
        location.label = first.display_label().unwrap_or_else(|| query.to_string());
        if let Some(code) = first.postal_code.filter(|code| !code.trim().is_empty()) {
            location.postal_code = Some(code.trim().to_string());
        }
        Some(location)
    }
}

/// Ordered chain of resolution tiers.
pub struct LocationResolver {
    tiers: Vec<Arc<dyn ResolutionTier>>,
    normalizer: SlotNormalizer,
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationResolver {
    /// Resolver with no tiers; every location comes back unresolved.
    pub fn new() -> Self {
        Self { tiers: Vec::new(), normalizer: SlotNormalizer::default() }
    }

    /// Known coordinates -> postal-code table -> geocoder.
    pub fn standard(
        postal_codes: Arc<dyn PostalCodeLookup>,
        geocoder: Arc<dyn Geocoder>,
        geocoder_timeout: Duration,
    ) -> Self {
        Self::new()
            .with_tier(Arc::new(KnownCoordinatesTier))
            .with_tier(Arc::new(PostalCodeTier::new(postal_codes)))
            .with_tier(Arc::new(GeocoderTier::new(geocoder).with_timeout(geocoder_timeout)))
    }

    /// Append a tier to the end of the chain.
    pub fn with_tier(mut self, tier: Arc<dyn ResolutionTier>) -> Self {
        self.tiers.push(tier);
        self
    }

    /// Radius applied when the raw location has none.
    pub fn with_default_radius(mut self, radius_miles: f64) -> Self {
        self.normalizer = SlotNormalizer::new(SlotDefaults::default().with_radius(radius_miles));
        self
    }

    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|tier| tier.name()).collect()
    }

    /// Resolve a raw location, best effort. Never fails.
    pub async fn resolve(&self, raw: &RawLocation) -> Location {
        let base = self.normalizer.normalize_location(Some(raw));
        self.resolve_from(raw, base).await
    }

    /// Resolve an already-normalized location, keeping its radius.
    pub async fn resolve_location(&self, location: &Location) -> Location {
        let raw = RawLocation::from(location);
        self.resolve_from(&raw, location.clone()).await
    }

    async fn resolve_from(&self, raw: &RawLocation, mut base: Location) -> Location {
        for tier in &self.tiers {
            if let Some(location) = tier.resolve(raw, &base).await {
                debug!(tier = tier.name(), label = %location.label, "location resolved");
                return location;
            }
        }

        // an unresolved location is labelled by its query, never a stale label
        debug!(query = %base.query, "no tier resolved location");
        base.label = base.query.clone();
        base
    }
}
