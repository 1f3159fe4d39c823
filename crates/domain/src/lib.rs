//! # Linkup Domain
//!
//! Business domain types and models for Linkup.
//!
//! This crate contains:
//! - Domain data types (Slot, Location, Profile, MatchGroup)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and `HH:MM` helpers
//!
//! ## Architecture
//! - No dependencies on other Linkup crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::time_of_day::{minutes_since_midnight, pad_time};
