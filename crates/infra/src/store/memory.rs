//! In-memory live profile store
//!
//! Keeps profiles in insertion order and republishes a full snapshot on a
//! `watch` channel after every write, so subscribers always see the latest
//! visible state (last write wins).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use linkup_core::{ProfileFeed, ProfileSnapshot, ProfileSnapshotSource, ProfileStore};
use linkup_domain::{Profile, ProfilePatch, Result};
use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::debug;

#[derive(Default)]
struct Profiles {
    ordered: Vec<Profile>,
    index: HashMap<String, usize>,
}

impl Profiles {
    fn upsert(&mut self, user_id: &str, patch: ProfilePatch) -> Profile {
        let position = match self.index.get(user_id).copied() {
            Some(position) => position,
            None => {
                self.ordered.push(Profile::new(user_id));
                self.index.insert(user_id.to_string(), self.ordered.len() - 1);
                self.ordered.len() - 1
            }
        };

        let profile = &mut self.ordered[position];
        profile.apply(patch);
        profile.clone()
    }

    fn snapshot(&self) -> ProfileSnapshot {
        Arc::new(self.ordered.clone())
    }
}

/// Process-local profile store with a live snapshot feed.
///
/// Cloning is cheap and clones share the same data and feed.
#[derive(Clone)]
pub struct InMemoryProfileStore {
    profiles: Arc<RwLock<Profiles>>,
    feed: Arc<watch::Sender<ProfileSnapshot>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        let (feed, _) = watch::channel(Arc::new(Vec::new()));
        Self { profiles: Arc::new(RwLock::new(Profiles::default())), feed: Arc::new(feed) }
    }

    /// Store pre-populated with whole profiles, in order.
    pub fn with_profiles(profiles: impl IntoIterator<Item = Profile>) -> Self {
        let store = Self::new();
        {
            let mut guard = store.profiles.write();
            for profile in profiles {
                let user_id = profile.user_id.clone();
                match guard.index.get(&user_id).copied() {
                    Some(position) => guard.ordered[position] = profile,
                    None => {
                        guard.ordered.push(profile);
                        let position = guard.ordered.len() - 1;
                        guard.index.insert(user_id, position);
                    }
                }
            }
            store.feed.send_replace(guard.snapshot());
        }
        store
    }

    pub fn len(&self) -> usize {
        self.profiles.read().ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current snapshot without going through the async port.
    pub fn snapshot(&self) -> ProfileSnapshot {
        self.profiles.read().snapshot()
    }
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        let guard = self.profiles.read();
        Ok(guard.index.get(user_id).map(|&position| guard.ordered[position].clone()))
    }

    async fn persist_profile(&self, user_id: &str, patch: ProfilePatch) -> Result<Profile> {
        // Publish while holding the write lock so snapshots are emitted in write order.
        let mut guard = self.profiles.write();
        let stored = guard.upsert(user_id, patch);
        self.feed.send_replace(guard.snapshot());
        debug!(
            user_id,
            slots = stored.slots.len(),
            is_looking = stored.is_looking,
            "profile persisted"
        );
        Ok(stored)
    }
}

#[async_trait]
impl ProfileSnapshotSource for InMemoryProfileStore {
    async fn latest_snapshot(&self) -> Result<ProfileSnapshot> {
        Ok(self.snapshot())
    }
}

impl ProfileFeed for InMemoryProfileStore {
    fn subscribe(&self) -> watch::Receiver<ProfileSnapshot> {
        self.feed.subscribe()
    }
}
