//! # Linkup Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Slot normalization and validation
//! - Tiered location resolution
//! - Overlap, proximity and match aggregation
//! - Port/adapter interfaces (traits) and the services using them
//!
//! ## Architecture Principles
//! - Only depends on `linkup-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Matching is a pure function of a profile snapshot

pub mod location;
pub mod matching;
pub mod profile;
pub mod slots;

// Re-export specific items to avoid ambiguity
pub use location::{Geocoder, LocationResolver, PostalCodeLookup, ResolutionTier};
pub use matching::{
    compute_matches, MatchingService, ProfileFeed, ProfileSnapshot, ProfileSnapshotSource,
};
pub use profile::{AvailabilityService, ProfileStore};
pub use slots::{normalize_slot, validate_raw_slot, SlotDefaults, SlotNormalizer};
