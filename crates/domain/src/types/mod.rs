//! Domain types and models

pub mod location;
pub mod matching;
pub mod profile;
pub mod slot;

pub use location::{Coordinates, GeocodeResult, Location, PostalCodeEntry, RawLocation};
pub use matching::{MatchGroup, Overlap};
pub use profile::{OwnerInfo, Preferences, Profile, ProfilePatch};
pub use slot::{RawSlot, Slot, Weekday};
