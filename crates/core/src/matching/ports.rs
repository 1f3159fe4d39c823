//! Port interfaces for match computation
//!
//! The engine never owns the profile feed; it is handed either a pull-based
//! snapshot source or a push-based watch channel.

use std::sync::Arc;

use async_trait::async_trait;
use linkup_domain::{Profile, Result};
use tokio::sync::watch;

/// Live snapshot of every profile, as emitted by the profile feed.
pub type ProfileSnapshot = Arc<Vec<Profile>>;

/// Trait for pulling the latest visible profile snapshot
#[async_trait]
pub trait ProfileSnapshotSource: Send + Sync {
    /// Latest snapshot of all profiles (looking or not)
    async fn latest_snapshot(&self) -> Result<ProfileSnapshot>;
}

/// Trait for subscribing to pushed profile snapshots
pub trait ProfileFeed: Send + Sync {
    /// Receiver that yields a new snapshot after every write
    fn subscribe(&self) -> watch::Receiver<ProfileSnapshot>;
}
