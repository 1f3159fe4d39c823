//! Derived match types, never persisted

use serde::{Deserialize, Serialize};

use super::profile::OwnerInfo;
use super::slot::Slot;

/// One qualifying pairing of my slot with a counterpart's slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlap {
    pub my_slot: Slot,
    pub other_slot: Slot,
    /// `None` when the pair qualified through postal-code equality
    pub distance_miles: Option<f64>,
}

/// All overlaps with one counterpart, sorted by weekday then start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchGroup {
    pub user_id: String,
    pub owner: OwnerInfo,
    pub overlaps: Vec<Overlap>,
}
