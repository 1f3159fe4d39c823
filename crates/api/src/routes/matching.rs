//! Match computation routes

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use linkup_core::compute_matches;
use linkup_domain::{MatchGroup, Profile};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::SharedContext;
use crate::error::ApiResult;

/// Body of `POST /matches`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub my_profile: Profile,
    #[serde(default)]
    pub other_profiles: Vec<Profile>,
}

/// Stateless computation over the profiles in the request body.
pub async fn compute(
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<MatchGroup>>> {
    let Json(request) = payload?;
    let groups = compute_matches(&request.my_profile, &request.other_profiles);
    info!(
        user_id = %request.my_profile.user_id,
        candidates = request.other_profiles.len(),
        groups = groups.len(),
        "matches computed for supplied snapshot"
    );
    Ok(Json(groups))
}

/// Matches for a stored profile against the live store.
pub async fn for_user(
    State(context): State<SharedContext>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<MatchGroup>>> {
    Ok(Json(context.matching.matches_for(&user_id).await?))
}
