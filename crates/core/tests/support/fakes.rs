//! In-memory fakes for core ports.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use linkup_core::{
    Geocoder, PostalCodeLookup, ProfileSnapshot, ProfileSnapshotSource, ProfileStore,
};
use linkup_domain::{
    GeocodeResult, LinkupError, PostalCodeEntry, Profile, ProfilePatch, Result as DomainResult,
};
use parking_lot::RwLock;

/// In-memory `ProfileStore` + `ProfileSnapshotSource` with merge writes.
#[derive(Default, Clone)]
pub struct MemoryProfiles {
    profiles: Arc<RwLock<Vec<Profile>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryProfiles {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles: Arc::new(RwLock::new(profiles)), writes: Arc::default() }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn get(&self, user_id: &str) -> Option<Profile> {
        self.profiles.read().iter().find(|p| p.user_id == user_id).cloned()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfiles {
    async fn get_profile(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        Ok(self.get(user_id))
    }

    async fn persist_profile(&self, user_id: &str, patch: ProfilePatch) -> DomainResult<Profile> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut profiles = self.profiles.write();
        let index = match profiles.iter().position(|p| p.user_id == user_id) {
            Some(index) => index,
            None => {
                profiles.push(Profile::new(user_id));
                profiles.len() - 1
            }
        };
        profiles[index].apply(patch);
        Ok(profiles[index].clone())
    }
}

#[async_trait]
impl ProfileSnapshotSource for MemoryProfiles {
    async fn latest_snapshot(&self) -> DomainResult<ProfileSnapshot> {
        Ok(Arc::new(self.profiles.read().clone()))
    }
}

/// Geocoder that answers from a fixed map and fails for anything else.
#[derive(Default)]
pub struct ScriptedGeocoder {
    answers: HashMap<String, Vec<GeocodeResult>>,
    calls: AtomicUsize,
}

impl ScriptedGeocoder {
    pub fn with_answer(mut self, query: &str, result: GeocodeResult) -> Self {
        self.answers.entry(query.to_string()).or_default().push(result);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for ScriptedGeocoder {
    async fn geocode(&self, query: &str) -> DomainResult<Vec<GeocodeResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .get(query)
            .cloned()
            .ok_or_else(|| LinkupError::Geocoding(format!("no answer scripted for {query}")))
    }
}

/// Postal-code table backed by a map.
#[derive(Default)]
pub struct MapPostalCodes(HashMap<String, PostalCodeEntry>);

impl MapPostalCodes {
    pub fn with(mut self, code: &str, lat: f64, lng: f64, city: &str, state: &str) -> Self {
        self.0.insert(
            code.to_string(),
            PostalCodeEntry {
                code: code.to_string(),
                lat,
                lng,
                city: city.to_string(),
                state: state.to_string(),
            },
        );
        self
    }
}

impl PostalCodeLookup for MapPostalCodes {
    fn lookup(&self, code: &str) -> Option<PostalCodeEntry> {
        self.0.get(code).cloned()
    }
}
