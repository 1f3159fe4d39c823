//! Match computation domain

pub mod aggregator;
pub mod overlap;
pub mod ports;
pub mod proximity;
pub mod service;

pub use aggregator::compute_matches;
pub use overlap::slots_overlap;
pub use ports::{ProfileFeed, ProfileSnapshot, ProfileSnapshotSource};
pub use proximity::{check_proximity, haversine_miles, Proximity};
pub use service::{follow_matches, matches_in_snapshot, MatchingService};
