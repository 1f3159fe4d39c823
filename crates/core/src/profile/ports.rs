//! Port interfaces for profile persistence
//!
//! The backing store only has to guarantee last-write-visible semantics;
//! matching always reads the latest visible snapshot.

use async_trait::async_trait;
use linkup_domain::{Profile, ProfilePatch, Result};

/// Trait for reading and writing one user's profile
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Get a profile by user ID
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Merge a partial profile into the stored one, creating it if missing.
    /// Returns the profile as stored after the write.
    async fn persist_profile(&self, user_id: &str, patch: ProfilePatch) -> Result<Profile>;
}
