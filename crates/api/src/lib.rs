//! # Linkup HTTP API
//!
//! Thin request/response surface over the matching engine.
//!
//! - `context`: wires configuration, adapters and services together
//! - `routes`: axum handlers, one module per resource
//! - `error`: `LinkupError` to HTTP status mapping
//! - `utils`: logging setup and health reporting

pub mod context;
pub mod error;
pub mod routes;
pub mod utils;

pub use context::AppContext;
pub use error::ApiError;
pub use routes::router;
pub use utils::logging::init_tracing;
