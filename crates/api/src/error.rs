//! HTTP error mapping
//!
//! Every handler error becomes `{ "error": <label>, "message": <text> }` with
//! a status derived from the `LinkupError` variant.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkup_domain::LinkupError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub type ApiResult<T> = Result<T, ApiError>;

/// Handler error carrying the domain error
#[derive(Debug)]
pub struct ApiError(pub LinkupError);

/// JSON body of an error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            LinkupError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            LinkupError::NotFound(_) => StatusCode::NOT_FOUND,
            LinkupError::Network(_) | LinkupError::Geocoding(_) => StatusCode::BAD_GATEWAY,
            LinkupError::Config(_) | LinkupError::Storage(_) | LinkupError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<LinkupError> for ApiError {
    fn from(value: LinkupError) -> Self {
        Self(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self(LinkupError::InvalidInput(value.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.0.label();
        if status.is_server_error() {
            warn!(error, status = status.as_u16(), message = %self.0, "request error");
        } else {
            debug!(error, status = status.as_u16(), message = %self.0, "request rejected");
        }

        let body = ErrorBody { error: error.to_string(), message: self.0.to_string() };
        (status, Json(body)).into_response()
    }
}
