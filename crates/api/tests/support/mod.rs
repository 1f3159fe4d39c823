//! Shared helpers for router tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use linkup_api::{router, AppContext};
use linkup_core::Geocoder;
use linkup_domain::{Config, PostalCodeEntry};
use linkup_infra::PostalCodeTable;
use serde_json::Value;
use tower::ServiceExt;

pub fn postal_table() -> PostalCodeTable {
    PostalCodeTable::from_entries(vec![
        PostalCodeEntry {
            code: "98225".into(),
            lat: 48.7519,
            lng: -122.4787,
            city: "Bellingham".into(),
            state: "WA".into(),
        },
        PostalCodeEntry {
            code: "98226".into(),
            lat: 48.7920,
            lng: -122.4420,
            city: "Bellingham".into(),
            state: "WA".into(),
        },
    ])
}

/// Router over a fresh in-memory store, optionally with a geocoder.
pub fn app(geocoder: Option<Arc<dyn Geocoder>>) -> (Router, Arc<AppContext>) {
    let context = Arc::new(AppContext::with_adapters(Config::default(), postal_table(), geocoder));
    (router(context.clone()), context)
}

/// Router over an explicit configuration and postal table, without a geocoder.
pub fn app_with(config: Config, postal: PostalCodeTable) -> (Router, Arc<AppContext>) {
    let context = Arc::new(AppContext::with_adapters(config, postal, None));
    (router(context.clone()), context)
}

/// Send one request and decode the JSON response body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}
