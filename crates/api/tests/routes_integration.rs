//! Router tests driven through `tower::ServiceExt::oneshot`.

mod support;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{Method, StatusCode};
use linkup_domain::Config;
use linkup_infra::{HttpClient, HttpGeocoder, PostalCodeTable};
use serde_json::{json, Value};
use support::{app, app_with, send};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn slot_body(day: &str, start: &str, end: &str, location: &str) -> Value {
    json!({
        "day": day,
        "startTime": start,
        "endTime": end,
        "location": { "query": location, "radiusMiles": 5.0 }
    })
}

#[tokio::test]
async fn health_reports_components() {
    let (app, _) = app(None);

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isHealthy"], true);
    let names: Vec<&str> =
        body["components"].as_array().unwrap().iter().filter_map(|c| c["name"].as_str()).collect();
    assert_eq!(names, vec!["profile_store", "postal_table", "geocoder"]);
}

#[tokio::test]
async fn empty_configured_postal_table_is_unhealthy() {
    let mut config = Config::default();
    config.postal.table_path = Some("postal.json".into());
    let (app, _) = app_with(config, PostalCodeTable::from_entries(Vec::new()));

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["isHealthy"], false);
    let postal = &body["components"][1];
    assert_eq!(postal["name"], "postal_table");
    assert_eq!(postal["isHealthy"], false);
    assert_eq!(postal["message"], "postal.json has no usable codes");
}

#[tokio::test]
async fn saved_slots_produce_matches() {
    let (app, _) = app(None);

    let (status, mine) = send(
        &app,
        Method::PUT,
        "/profiles/me/slots",
        Some(slot_body("thursday", "18:00", "21:00", "98225")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine["location"]["label"], "Bellingham, WA");

    send(
        &app,
        Method::PUT,
        "/profiles/ana/slots",
        Some(slot_body("thursday", "19:00", "22:00", "98226")),
    )
    .await;

    let (status, groups) = send(&app, Method::GET, "/profiles/me/matches", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(groups.as_array().map(Vec::len), Some(1));
    assert_eq!(groups[0]["userId"], "ana");
    assert_eq!(groups[0]["overlaps"][0]["mySlot"]["id"], mine["id"]);
    assert!(groups[0]["overlaps"][0]["distanceMiles"].as_f64().unwrap() < 5.0);
}

#[tokio::test]
async fn hiding_a_profile_removes_it_from_matches() {
    let (app, _) = app(None);
    for user in ["me", "ana"] {
        let uri = format!("/profiles/{user}/slots");
        send(&app, Method::PUT, &uri, Some(slot_body("monday", "18:00", "21:00", "98225"))).await;
    }

    let (status, profile) =
        send(&app, Method::PUT, "/profiles/ana/looking", Some(json!({ "isLooking": false }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["isLooking"], false);

    let (_, groups) = send(&app, Method::GET, "/profiles/me/matches", None).await;
    assert_eq!(groups, json!([]));
}

#[tokio::test]
async fn inverted_range_is_bad_request() {
    let (app, context) = app(None);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/profiles/me/slots",
        Some(slot_body("monday", "21:00", "18:00", "98225")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
    assert!(context.store.is_empty());
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (app, _) = app(None);

    let (status, body) =
        send(&app, Method::PUT, "/profiles/me/looking", Some(json!({ "isLooking": "maybe" })))
            .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}

#[tokio::test]
async fn unknown_profile_is_not_found() {
    let (app, _) = app(None);

    let (status, body) = send(&app, Method::GET, "/profiles/ghost/matches", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, _) = send(&app, Method::GET, "/profiles/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_slot_then_delete_again() {
    let (app, _) = app(None);
    let (_, slot) = send(
        &app,
        Method::PUT,
        "/profiles/me/slots",
        Some(slot_body("friday", "18:00", "20:00", "98225")),
    )
    .await;
    let uri = format!("/profiles/me/slots/{}", slot["id"].as_str().unwrap());

    let (status, removed) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["id"], slot["id"]);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, profile) = send(&app, Method::GET, "/profiles/me", None).await;
    assert_eq!(profile["slots"], json!([]));
}

#[tokio::test]
async fn radius_preference_is_coerced_and_applied() {
    let (app, _) = app(None);

    let (_, profile) =
        send(&app, Method::PUT, "/profiles/me/radius", Some(json!({ "defaultRadiusMiles": -3 })))
            .await;
    assert_eq!(profile["preferences"]["defaultRadiusMiles"], 5.0);

    send(&app, Method::PUT, "/profiles/me/radius", Some(json!({ "defaultRadiusMiles": 12.0 })))
        .await;
    let (_, slot) = send(
        &app,
        Method::PUT,
        "/profiles/me/slots",
        Some(json!({ "day": "monday", "location": { "query": "98225" } })),
    )
    .await;
    assert_eq!(slot["location"]["radiusMiles"], 12.0);
}

#[tokio::test]
async fn normalize_applies_defaults() {
    let (app, _) = app(None);

    let (status, slot) = send(
        &app,
        Method::POST,
        "/slots/normalize",
        Some(json!({ "day": "2", "startTime": "9:5" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(slot["day"], "tuesday");
    assert_eq!(slot["startTime"], "09:05");
    assert_eq!(slot["endTime"], "21:00");
    assert_eq!(slot["location"]["radiusMiles"], 5.0);
    assert!(slot["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn resolve_uses_postal_table() {
    let (app, _) = app(None);

    let (status, location) =
        send(&app, Method::POST, "/locations/resolve", Some(json!({ "query": " 98225 " }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(location["label"], "Bellingham, WA");
    assert_eq!(location["lat"], 48.7519);
}

#[tokio::test]
async fn resolve_degrades_when_geocoder_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(500)).mount(&server).await;
    let http_client = HttpClient::builder().max_attempts(1).build().unwrap();
    let geocoder = HttpGeocoder::new(&server.uri(), http_client)
        .unwrap()
        .with_timeout(Duration::from_secs(1));
    let (app, _) = app(Some(Arc::new(geocoder)));

    let (status, location) = send(
        &app,
        Method::POST,
        "/locations/resolve",
        Some(json!({ "query": "Fairhaven Park", "radiusMiles": 3 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(location["label"], "Fairhaven Park");
    assert_eq!(location["lat"], Value::Null);
    assert_eq!(location["radiusMiles"], 3.0);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn stateless_matches_over_supplied_profiles() {
    let (app, _) = app(None);
    let normalize = |day: &str, start: &str, end: &str| {
        json!({
            "day": day,
            "startTime": start,
            "endTime": end,
            "location": { "postalCode": "98225" }
        })
    };

    let (_, mine) =
        send(&app, Method::POST, "/slots/normalize", Some(normalize("sunday", "10:00", "12:00")))
            .await;
    let (_, theirs) =
        send(&app, Method::POST, "/slots/normalize", Some(normalize("sunday", "11:00", "13:00")))
            .await;
    let (_, hidden) =
        send(&app, Method::POST, "/slots/normalize", Some(normalize("sunday", "10:00", "12:00")))
            .await;

    let request = json!({
        "myProfile": { "userId": "me", "isLooking": true, "slots": [mine] },
        "otherProfiles": [
            { "userId": "ana", "isLooking": true, "slots": [theirs], "owner": { "name": "Ana" } },
            { "userId": "cy", "isLooking": false, "slots": [hidden] }
        ]
    });
    let (status, groups) = send(&app, Method::POST, "/matches", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(groups.as_array().map(Vec::len), Some(1));
    assert_eq!(groups[0]["owner"]["name"], "Ana");
    assert_eq!(groups[0]["overlaps"][0]["distanceMiles"], Value::Null);
}
