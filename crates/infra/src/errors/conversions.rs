//! Conversions from external infrastructure errors into domain errors.

use linkup_domain::LinkupError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub LinkupError);

impl From<InfraError> for LinkupError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<LinkupError> for InfraError {
    fn from(value: LinkupError) -> Self {
        InfraError(value)
    }
}

trait IntoLinkupError {
    fn into_linkup(self) -> LinkupError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → LinkupError */
/* -------------------------------------------------------------------------- */

impl IntoLinkupError for HttpError {
    fn into_linkup(self) -> LinkupError {
        if self.is_timeout() {
            return LinkupError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return LinkupError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return LinkupError::Geocoding(format!("undecodable HTTP body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                404 => LinkupError::NotFound(message),
                429 => LinkupError::Network(message),
                400..=499 => LinkupError::InvalidInput(message),
                _ => LinkupError::Network(message),
            };
        }

        LinkupError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_linkup())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → LinkupError */
/* -------------------------------------------------------------------------- */

impl IntoLinkupError for JsonError {
    fn into_linkup(self) -> LinkupError {
        LinkupError::InvalidInput(format!(
            "malformed JSON at line {} column {}: {self}",
            self.line(),
            self.column()
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_linkup())
    }
}
