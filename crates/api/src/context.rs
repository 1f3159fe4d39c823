//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use linkup_core::location::{GeocoderTier, KnownCoordinatesTier, PostalCodeTier};
use linkup_core::{AvailabilityService, Geocoder, LocationResolver, MatchingService, SlotDefaults};
use linkup_domain::{Config, Result};
use linkup_infra::{HttpGeocoder, InMemoryProfileStore, PostalCodeTable};
use tracing::info;

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub store: InMemoryProfileStore,
    pub resolver: Arc<LocationResolver>,
    pub availability: AvailabilityService,
    pub matching: MatchingService,
    postal_entries: usize,
    geocoding_enabled: bool,
}

impl AppContext {
    /// Build the context from configuration, loading the postal table and
    /// constructing the HTTP geocoder when enabled.
    ///
    /// # Errors
    /// Returns `LinkupError::Config` when the postal table or geocoder
    /// settings are unusable.
    pub fn new(config: Config) -> Result<Self> {
        let postal = PostalCodeTable::load(&config.postal)?;
        let geocoder: Option<Arc<dyn Geocoder>> = if config.geocoder.enabled {
            Some(Arc::new(HttpGeocoder::from_config(&config.geocoder)?))
        } else {
            None
        };
        Ok(Self::with_adapters(config, postal, geocoder))
    }

    /// Build the context around already-constructed adapters.
    pub fn with_adapters(
        config: Config,
        postal: PostalCodeTable,
        geocoder: Option<Arc<dyn Geocoder>>,
    ) -> Self {
        let radius = config.matching.default_radius_miles;
        let postal_entries = postal.len();
        let geocoding_enabled = geocoder.is_some();

        let mut resolver = LocationResolver::new()
            .with_default_radius(radius)
            .with_tier(Arc::new(KnownCoordinatesTier))
            .with_tier(Arc::new(PostalCodeTier::new(Arc::new(postal))));
        if let Some(geocoder) = geocoder {
            let timeout = Duration::from_millis(config.geocoder.timeout_ms);
            let tier = GeocoderTier::new(geocoder).with_timeout(timeout);
            resolver = resolver.with_tier(Arc::new(tier));
        }
        let resolver = Arc::new(resolver);

        let store = InMemoryProfileStore::new();
        let availability = AvailabilityService::new(Arc::new(store.clone()), resolver.clone())
            .with_defaults(SlotDefaults::default().with_radius(radius));
        let matching = MatchingService::new(Arc::new(store.clone()));

        info!(
            tiers = ?resolver.tier_names(),
            postal_entries,
            default_radius_miles = radius,
            "application context ready"
        );

        Self { config, store, resolver, availability, matching, postal_entries, geocoding_enabled }
    }

    /// Check the health of every component
    pub fn health_check(&self) -> HealthStatus {
        let postal = match (&self.config.postal.table_path, self.postal_entries) {
            (Some(path), 0) => {
                ComponentHealth::unhealthy("postal_table", format!("{path} has no usable codes"))
            }
            (None, 0) => {
                ComponentHealth::healthy("postal_table").with_message("no table configured")
            }
            (_, entries) => {
                ComponentHealth::healthy("postal_table").with_message(format!("{entries} codes"))
            }
        };
        let geocoder = if self.geocoding_enabled {
            ComponentHealth::healthy("geocoder")
        } else {
            ComponentHealth::healthy("geocoder").with_message("disabled")
        };

        HealthStatus::new()
            .add_component(
                ComponentHealth::healthy("profile_store")
                    .with_message(format!("{} profiles", self.store.len())),
            )
            .add_component(postal)
            .add_component(geocoder)
            .finish()
    }
}
