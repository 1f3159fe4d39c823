//! Shared test helpers for `linkup-core` integration tests.
//!
//! Lightweight in-memory fakes for the core ports plus slot/profile
//! builders, so scenario tests can focus on behaviour.

#![allow(dead_code)]

pub mod fakes;

use chrono::{TimeZone, Utc};
use linkup_domain::{Coordinates, Location, OwnerInfo, Profile, Slot, Weekday};

/// Slot at fixed coordinates with the given radius.
pub fn slot_at(
    id: &str,
    day: Weekday,
    start: &str,
    end: &str,
    (lat, lng): (f64, f64),
    radius_miles: f64,
) -> Slot {
    let location = Location::unresolved(format!("{lat},{lng}"), radius_miles)
        .with_coordinates(Coordinates { lat, lng });
    slot_with_location(id, day, start, end, location)
}

/// Slot that only carries a postal code.
pub fn slot_in_postal_code(id: &str, day: Weekday, start: &str, end: &str, code: &str) -> Slot {
    let mut location = Location::unresolved(code, 5.0);
    location.postal_code = Some(code.to_string());
    slot_with_location(id, day, start, end, location)
}

pub fn slot_with_location(
    id: &str,
    day: Weekday,
    start: &str,
    end: &str,
    location: Location,
) -> Slot {
    let stamp = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    Slot {
        id: id.to_string(),
        day,
        start_time: start.to_string(),
        end_time: end.to_string(),
        location,
        notes: None,
        created_at: stamp,
        updated_at: stamp,
    }
}

/// Looking profile with a display name derived from the user id.
pub fn looking(user_id: &str, slots: Vec<Slot>) -> Profile {
    Profile {
        slots,
        owner: OwnerInfo { name: Some(format!("{user_id} display")), ..Default::default() },
        ..Profile::new(user_id)
    }
}

pub fn hidden(user_id: &str, slots: Vec<Slot>) -> Profile {
    Profile { is_looking: false, ..looking(user_id, slots) }
}
