//! Slot normalization and validation

pub mod normalizer;
pub mod validator;

pub use normalizer::{normalize_slot, valid_radius, SlotDefaults, SlotNormalizer};
pub use validator::validate_raw_slot;
