//! Stateless normalization and resolution routes

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use linkup_core::normalize_slot;
use linkup_domain::{Location, RawLocation, RawSlot, Slot};

use super::SharedContext;
use crate::error::ApiResult;

/// Normalize a raw slot without resolving or storing it.
pub async fn normalize(
    State(context): State<SharedContext>,
    payload: Result<Json<RawSlot>, JsonRejection>,
) -> ApiResult<Json<Slot>> {
    let Json(raw) = payload?;
    Ok(Json(normalize_slot(&raw, context.config.matching.default_radius_miles)))
}

/// Resolve a raw location through the tier chain. Never fails on lookup
/// errors; an unresolvable location comes back without coordinates.
pub async fn resolve(
    State(context): State<SharedContext>,
    payload: Result<Json<RawLocation>, JsonRejection>,
) -> ApiResult<Json<Location>> {
    let Json(raw) = payload?;
    Ok(Json(context.resolver.resolve(&raw).await))
}
