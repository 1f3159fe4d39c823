//! Integration tests for the wire format of domain types
//!
//! Profiles and match groups travel as camelCase JSON between the client
//! and the engine; these tests pin the field names and defaults.

use linkup_domain::{
    Config, LinkupError, Location, MatchGroup, Overlap, Profile, ProfilePatch, RawSlot, Slot,
    Weekday,
};

// ============================================================================
// Profile documents
// ============================================================================

/// Scenario: a stored profile document written by an older client
#[test]
fn test_profile_document_with_missing_sections() {
    let profile: Profile = serde_json::from_str(
        r#"{
            "userId": "u1",
            "slots": [{
                "id": "s1",
                "day": "wednesday",
                "startTime": "12:00",
                "endTime": "13:00",
                "location": { "query": "98225", "label": "98225", "radiusMiles": 5 },
                "createdAt": "2024-05-01T12:00:00Z",
                "updatedAt": "2024-05-01T12:00:00Z"
            }]
        }"#,
    )
    .expect("profile parses");

    assert_eq!(profile.slots.len(), 1);
    assert_eq!(profile.slots[0].day, Weekday::Wednesday);
    assert_eq!(profile.slots[0].location.postal_code, None);
    assert!(!profile.is_looking, "missing visibility means hidden");
    assert_eq!(profile.preferences.default_radius_miles, 5.0);
}

#[test]
fn test_profile_patch_merges_only_present_fields() {
    let mut profile = Profile::new("u1");
    let patch: ProfilePatch = serde_json::from_str(r#"{ "isLooking": false }"#).unwrap();

    profile.apply(patch);

    assert!(!profile.is_looking);
    assert!(profile.slots.is_empty());
}

// ============================================================================
// Slots
// ============================================================================

#[test]
fn test_raw_slot_tolerates_garbage_fields() {
    let raw: RawSlot =
        serde_json::from_str(r#"{ "day": "Funday", "startTime": "25:99", "extra": true }"#)
            .expect("unknown fields are ignored");

    assert_eq!(raw.day.as_deref(), Some("Funday"));
    assert_eq!(raw.end_time, None);
    assert_eq!(raw.location, None);
}

#[test]
fn test_slot_round_trips_through_raw_form() {
    let slot: Slot = serde_json::from_value(serde_json::json!({
        "id": "s1",
        "day": "friday",
        "startTime": "18:00",
        "endTime": "21:00",
        "location": {
            "query": "Fairhaven",
            "label": "Bellingham, WA",
            "lat": 48.72,
            "lng": -122.5,
            "radiusMiles": 3.5
        },
        "notes": "board games",
        "createdAt": "2024-05-01T12:00:00Z",
        "updatedAt": "2024-05-02T12:00:00Z"
    }))
    .unwrap();

    let raw = RawSlot::from(&slot);
    assert_eq!(raw.id.as_deref(), Some("s1"));
    assert_eq!(raw.day.as_deref(), Some("friday"));
    assert_eq!(raw.created_at, Some(slot.created_at));
    let location = raw.location.expect("location carried over");
    assert_eq!(location.coordinates(), slot.location.coordinates());
    assert_eq!(location.radius_miles, Some(3.5));
}

// ============================================================================
// Match output
// ============================================================================

#[test]
fn test_match_group_serializes_camel_case() {
    let slot: Slot = serde_json::from_value(serde_json::json!({
        "id": "s1",
        "day": "monday",
        "startTime": "18:00",
        "endTime": "21:00",
        "location": Location::unresolved("98225", 5.0),
        "createdAt": "2024-05-01T12:00:00Z",
        "updatedAt": "2024-05-01T12:00:00Z"
    }))
    .unwrap();
    let group = MatchGroup {
        user_id: "ana".into(),
        owner: Default::default(),
        overlaps: vec![Overlap {
            my_slot: slot.clone(),
            other_slot: slot,
            distance_miles: Some(1.5),
        }],
    };

    let json = serde_json::to_value(&group).unwrap();

    assert_eq!(json["userId"], "ana");
    assert_eq!(json["overlaps"][0]["distanceMiles"], 1.5);
    assert_eq!(json["overlaps"][0]["mySlot"]["startTime"], "18:00");
    assert!(json["overlaps"][0]["mySlot"].get("notes").is_none());
}

// ============================================================================
// Configuration and errors
// ============================================================================

#[test]
fn test_config_defaults_from_empty_document() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.geocoder.timeout_ms, 5000);
    assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
}

#[test]
fn test_error_round_trips_as_tagged_object() {
    let err = LinkupError::Geocoding("provider unavailable".into());
    let json = serde_json::to_string(&err).unwrap();
    let back: LinkupError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
    assert_eq!(err.label(), "geocoding");
}
