//! Tracing setup and request logging

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info,linkup=debug";

const JSON_LOG_VAR: &str = "LINKUP_LOG_JSON";

/// Install the global tracing subscriber.
///
/// Honours `RUST_LOG`, and switches to JSON lines when `LINKUP_LOG_JSON` is
/// truthy. Returns `false` when a subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = if json_logs_requested() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}

fn json_logs_requested() -> bool {
    std::env::var(JSON_LOG_VAR)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

/// Middleware logging one line per request with structured fields.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = started.elapsed().as_millis() as u64;
    if response.status().is_server_error() {
        warn!(%method, path, status, duration_ms, "request_failed");
    } else {
        info!(%method, path, status, duration_ms, "request_completed");
    }
    response
}
