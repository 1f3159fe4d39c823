use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::SharedContext;
use crate::utils::health::HealthStatus;

/// `200` with the component report, or `503` when any component is down.
pub async fn health(State(context): State<SharedContext>) -> (StatusCode, Json<HealthStatus>) {
    let status = context.health_check();
    let code = if status.is_healthy { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (code, Json(status))
}
