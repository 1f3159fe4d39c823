//! Matching service - core business logic

use std::sync::Arc;

use linkup_domain::{LinkupError, MatchGroup, Profile, Result};
use tokio::sync::watch;
use tracing::{debug, info};

use super::aggregator::compute_matches;
use super::ports::{ProfileSnapshot, ProfileSnapshotSource};

/// Matching service bound to a snapshot source
pub struct MatchingService {
    snapshots: Arc<dyn ProfileSnapshotSource>,
}

impl MatchingService {
    /// Create a new matching service
    pub fn new(snapshots: Arc<dyn ProfileSnapshotSource>) -> Self {
        Self { snapshots }
    }

    /// Compute matches for `user_id` from the latest snapshot.
    ///
    /// # Errors
    /// Returns `LinkupError::NotFound` if the user has no profile in the
    /// snapshot, or the snapshot source's error.
    pub async fn matches_for(&self, user_id: &str) -> Result<Vec<MatchGroup>> {
        let snapshot = self.snapshots.latest_snapshot().await?;
        matches_in_snapshot(user_id, &snapshot)
    }
}

/// Compute matches for `user_id` against one snapshot.
///
/// # Errors
/// Returns `LinkupError::NotFound` if the user is not part of the snapshot.
pub fn matches_in_snapshot(user_id: &str, snapshot: &[Profile]) -> Result<Vec<MatchGroup>> {
    let me = snapshot
        .iter()
        .find(|profile| profile.user_id == user_id)
        .ok_or_else(|| LinkupError::NotFound(format!("profile {user_id}")))?;

    let groups = compute_matches(me, snapshot);
    info!(
        user_id,
        candidates = snapshot.len().saturating_sub(1),
        groups = groups.len(),
        "matches computed"
    );
    Ok(groups)
}

/// Re-run matching for every snapshot the feed emits.
///
/// `on_update` is called once for the current snapshot and then after each
/// change, until the feed's sender is dropped. A user missing from a
/// snapshot yields an empty match list.
pub async fn follow_matches<F>(
    user_id: &str,
    mut feed: watch::Receiver<ProfileSnapshot>,
    mut on_update: F,
) where
    F: FnMut(Vec<MatchGroup>) + Send,
{
    loop {
        let snapshot = feed.borrow_and_update().clone();
        let groups = matches_in_snapshot(user_id, &snapshot).unwrap_or_default();
        on_update(groups);

        if feed.changed().await.is_err() {
            debug!(user_id, "profile feed closed; stopping match updates");
            return;
        }
    }
}
