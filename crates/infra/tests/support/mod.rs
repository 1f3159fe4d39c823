//! Shared helpers for `linkup-infra` integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use linkup_core::{AvailabilityService, LocationResolver};
use linkup_domain::{RawLocation, RawSlot};
use linkup_infra::{HttpClient, HttpGeocoder, InMemoryProfileStore, PostalCodeTable};
use tempfile::NamedTempFile;

pub const POSTAL_ROWS: &str = r#"[
    { "code": "98225", "lat": 48.7519, "lng": -122.4787, "city": "Bellingham", "state": "WA" },
    { "code": "98226", "lat": 48.7920, "lng": -122.4420, "city": "Bellingham", "state": "WA" },
    { "code": "10001", "lat": 40.7506, "lng": -73.9972, "city": "New York", "state": "NY" }
]"#;

/// Postal table written to a temporary file, loaded back through the adapter.
pub fn postal_table() -> (PostalCodeTable, NamedTempFile) {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(POSTAL_ROWS.as_bytes()).expect("write postal rows");
    let table = PostalCodeTable::from_path(file.path()).expect("postal table");
    (table, file)
}

/// Geocoder pointed at a mock server, without retries.
pub fn geocoder(base_url: &str) -> HttpGeocoder {
    let http_client = HttpClient::builder()
        .max_attempts(1)
        .timeout(Duration::from_secs(2))
        .build()
        .expect("http client");
    HttpGeocoder::new(base_url, http_client).expect("geocoder").with_timeout(Duration::from_secs(2))
}

/// Write-path service wired to real adapters.
pub fn availability(
    store: &InMemoryProfileStore,
    postal: PostalCodeTable,
    geocoder: HttpGeocoder,
) -> AvailabilityService {
    let resolver =
        LocationResolver::standard(Arc::new(postal), Arc::new(geocoder), Duration::from_secs(2));
    AvailabilityService::new(Arc::new(store.clone()), Arc::new(resolver))
}

pub fn raw_slot(day: &str, start: &str, end: &str, location: &str, radius: f64) -> RawSlot {
    RawSlot {
        day: Some(day.into()),
        start_time: Some(start.into()),
        end_time: Some(end.into()),
        location: Some(RawLocation {
            query: Some(location.into()),
            radius_miles: Some(radius),
            ..Default::default()
        }),
        ..Default::default()
    }
}
