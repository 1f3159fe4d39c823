//! Availability profiles
//!
//! One profile per user, holding their slots and visibility switch.

use serde::{Deserialize, Serialize};

use super::slot::Slot;
use crate::constants::DEFAULT_RADIUS_MILES;

/// Denormalized display info used to render a match without a second lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerInfo {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Fallback radius for slots that omit one
    pub default_radius_miles: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { default_radius_miles: DEFAULT_RADIUS_MILES }
    }
}

/// A user's full availability state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    #[serde(default)]
    pub slots: Vec<Slot>,
    /// Profiles that are not looking never appear as a counterpart
    #[serde(default)]
    pub is_looking: bool,
    #[serde(default)]
    pub owner: OwnerInfo,
    #[serde(default)]
    pub preferences: Preferences,
}

impl Profile {
    /// Empty profile, created lazily on a user's first slot save.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            slots: Vec::new(),
            is_looking: true,
            owner: OwnerInfo::default(),
            preferences: Preferences::default(),
        }
    }

    pub fn slot(&self, slot_id: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id == slot_id)
    }

    /// Insert or replace a slot by id.
    pub fn upsert_slot(&mut self, slot: Slot) {
        match self.slots.iter_mut().find(|existing| existing.id == slot.id) {
            Some(existing) => *existing = slot,
            None => self.slots.push(slot),
        }
    }

    /// Remove a slot by id, returning it if it existed.
    pub fn remove_slot(&mut self, slot_id: &str) -> Option<Slot> {
        let index = self.slots.iter().position(|slot| slot.id == slot_id)?;
        Some(self.slots.remove(index))
    }

    /// Apply a partial update; fields left as `None` are untouched.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(slots) = patch.slots {
            self.slots = slots;
        }
        if let Some(is_looking) = patch.is_looking {
            self.is_looking = is_looking;
        }
        if let Some(owner) = patch.owner {
            self.owner = owner;
        }
        if let Some(preferences) = patch.preferences {
            self.preferences = preferences;
        }
    }
}

/// Partial profile write with merge semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    pub slots: Option<Vec<Slot>>,
    pub is_looking: Option<bool>,
    pub owner: Option<OwnerInfo>,
    pub preferences: Option<Preferences>,
}
