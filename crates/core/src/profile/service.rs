//! Availability service - the write path for a user's own profile
//!
//! Slot edits are validated, normalized and geo-resolved here before being
//! merged into the owner's profile. This is the only place user-correctable
//! errors are surfaced.

use std::sync::Arc;

use linkup_domain::{LinkupError, Profile, ProfilePatch, RawSlot, Result, Slot};
use tracing::info;

use super::ports::ProfileStore;
use crate::location::LocationResolver;
use crate::slots::{valid_radius, validate_raw_slot, SlotDefaults, SlotNormalizer};

/// Availability service for slot and visibility edits
pub struct AvailabilityService {
    store: Arc<dyn ProfileStore>,
    resolver: Arc<LocationResolver>,
    defaults: SlotDefaults,
}

impl AvailabilityService {
    /// Create a new availability service
    pub fn new(store: Arc<dyn ProfileStore>, resolver: Arc<LocationResolver>) -> Self {
        Self { store, resolver, defaults: SlotDefaults::default() }
    }

    /// Replace the defaults table used for new slots
    pub fn with_defaults(mut self, defaults: SlotDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Fetch a profile, or `NotFound`.
    pub async fn profile(&self, user_id: &str) -> Result<Profile> {
        self.store
            .get_profile(user_id)
            .await?
            .ok_or_else(|| LinkupError::NotFound(format!("profile {user_id}")))
    }

    /// Add or update one of the user's slots.
    ///
    /// Creates the profile on first save. An update keeps the slot's
    /// original `created_at`.
    ///
    /// # Errors
    /// Returns `LinkupError::InvalidInput` when the time range is inverted or
    /// unparsable, or the store's error.
    pub async fn save_slot(&self, user_id: &str, raw: RawSlot) -> Result<Slot> {
        let mut profile =
            self.store.get_profile(user_id).await?.unwrap_or_else(|| Profile::new(user_id));

        let defaults = self.defaults.clone().with_radius(profile.preferences.default_radius_miles);
        validate_raw_slot(&raw, &defaults)?;

        let mut raw = raw;
        if let Some(existing) = raw.id.as_deref().and_then(|id| profile.slot(id.trim())) {
            raw.created_at = Some(existing.created_at);
        }

        let mut slot = SlotNormalizer::new(defaults).normalize(&raw);
        slot.location = self.resolver.resolve_location(&slot.location).await;

        profile.upsert_slot(slot.clone());
        let patch = ProfilePatch { slots: Some(profile.slots), ..Default::default() };
        self.store.persist_profile(user_id, patch).await?;

        info!(
            user_id,
            slot_id = %slot.id,
            day = %slot.day,
            resolved = slot.location.coordinates().is_some(),
            "slot saved"
        );
        Ok(slot)
    }

    /// Remove one of the user's slots.
    ///
    /// # Errors
    /// Returns `LinkupError::NotFound` if the profile or slot does not exist.
    pub async fn remove_slot(&self, user_id: &str, slot_id: &str) -> Result<Slot> {
        let mut profile = self.profile(user_id).await?;
        let removed = profile
            .remove_slot(slot_id)
            .ok_or_else(|| LinkupError::NotFound(format!("slot {slot_id}")))?;

        let patch = ProfilePatch { slots: Some(profile.slots), ..Default::default() };
        self.store.persist_profile(user_id, patch).await?;

        info!(user_id, slot_id, "slot removed");
        Ok(removed)
    }

    /// Toggle whether the user is visible to matching.
    pub async fn set_looking(&self, user_id: &str, is_looking: bool) -> Result<Profile> {
        let profile = self
            .store
            .persist_profile(
                user_id,
                ProfilePatch { is_looking: Some(is_looking), ..Default::default() },
            )
            .await?;

        info!(user_id, is_looking, "visibility changed");
        Ok(profile)
    }

    /// Change the fallback radius for slots without one.
    ///
    /// Invalid radii are coerced to the defaults table value, never rejected.
    pub async fn set_default_radius(&self, user_id: &str, radius_miles: f64) -> Result<Profile> {
        let mut preferences = self
            .store
            .get_profile(user_id)
            .await?
            .map(|profile| profile.preferences)
            .unwrap_or_default();
        preferences.default_radius_miles =
            valid_radius(Some(radius_miles)).unwrap_or(self.defaults.radius_miles);

        let profile = self
            .store
            .persist_profile(
                user_id,
                ProfilePatch { preferences: Some(preferences), ..Default::default() },
            )
            .await?;

        info!(
            user_id,
            radius_miles = profile.preferences.default_radius_miles,
            "default radius changed"
        );
        Ok(profile)
    }
}
