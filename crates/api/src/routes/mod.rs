//! HTTP routes
//!
//! | Route | Operation |
//! |---|---|
//! | `GET /health` | component health |
//! | `POST /matches` | compute matches for a supplied snapshot |
//! | `POST /slots/normalize` | normalize a raw slot |
//! | `POST /locations/resolve` | resolve a raw location |
//! | `GET /profiles/{user_id}` | stored profile |
//! | `GET /profiles/{user_id}/matches` | matches against the live store |
//! | `PUT /profiles/{user_id}/slots` | add or update a slot |
//! | `DELETE /profiles/{user_id}/slots/{slot_id}` | remove a slot |
//! | `PUT /profiles/{user_id}/looking` | visibility toggle |
//! | `PUT /profiles/{user_id}/radius` | default radius preference |

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};

use crate::context::AppContext;
use crate::utils::logging::log_requests;

pub mod health;
pub mod matching;
pub mod profiles;
pub mod slots;

/// Shared state handed to every handler
pub type SharedContext = Arc<AppContext>;

/// Build the application router.
pub fn router(context: SharedContext) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/matches", post(matching::compute))
        .route("/slots/normalize", post(slots::normalize))
        .route("/locations/resolve", post(slots::resolve))
        .route("/profiles/{user_id}", get(profiles::get_profile))
        .route("/profiles/{user_id}/matches", get(matching::for_user))
        .route("/profiles/{user_id}/slots", put(profiles::save_slot))
        .route("/profiles/{user_id}/slots/{slot_id}", delete(profiles::remove_slot))
        .route("/profiles/{user_id}/looking", put(profiles::set_looking))
        .route("/profiles/{user_id}/radius", put(profiles::set_radius))
        .layer(middleware::from_fn(log_requests))
        .with_state(context)
}
