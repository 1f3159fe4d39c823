//! Profile write-path routes

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use linkup_domain::{Profile, RawSlot, Slot};
use serde::{Deserialize, Serialize};

use super::SharedContext;
use crate::error::ApiResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookingRequest {
    pub is_looking: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusRequest {
    pub default_radius_miles: f64,
}

pub async fn get_profile(
    State(context): State<SharedContext>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Profile>> {
    Ok(Json(context.availability.profile(&user_id).await?))
}

/// Validate, normalize, resolve and store one slot.
pub async fn save_slot(
    State(context): State<SharedContext>,
    Path(user_id): Path<String>,
    payload: Result<Json<RawSlot>, JsonRejection>,
) -> ApiResult<Json<Slot>> {
    let Json(raw) = payload?;
    Ok(Json(context.availability.save_slot(&user_id, raw).await?))
}

pub async fn remove_slot(
    State(context): State<SharedContext>,
    Path((user_id, slot_id)): Path<(String, String)>,
) -> ApiResult<Json<Slot>> {
    Ok(Json(context.availability.remove_slot(&user_id, &slot_id).await?))
}

pub async fn set_looking(
    State(context): State<SharedContext>,
    Path(user_id): Path<String>,
    payload: Result<Json<LookingRequest>, JsonRejection>,
) -> ApiResult<Json<Profile>> {
    let Json(request) = payload?;
    Ok(Json(context.availability.set_looking(&user_id, request.is_looking).await?))
}

pub async fn set_radius(
    State(context): State<SharedContext>,
    Path(user_id): Path<String>,
    payload: Result<Json<RadiusRequest>, JsonRejection>,
) -> ApiResult<Json<Profile>> {
    let Json(request) = payload?;
    Ok(Json(context.availability.set_default_radius(&user_id, request.default_radius_miles).await?))
}
