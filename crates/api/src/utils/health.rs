//! Health reporting for the HTTP process
//!
//! Components are probed locally; the geocoder is never called from a
//! health check.

use serde::{Deserialize, Serialize};

/// Overall health status of the process
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// `true` only when every component is healthy
    pub is_healthy: bool,
    pub components: Vec<ComponentHealth>,
    /// Unix timestamp when the check was performed
    pub timestamp: i64,
}

impl HealthStatus {
    pub fn new() -> Self {
        Self { is_healthy: true, components: Vec::new(), timestamp: chrono::Utc::now().timestamp() }
    }

    /// Add a component health check; returns self for chaining
    pub fn add_component(mut self, component: ComponentHealth) -> Self {
        self.components.push(component);
        self
    }

    /// Recompute `is_healthy` from the components.
    pub fn finish(mut self) -> Self {
        self.is_healthy = self.components.iter().all(|c| c.is_healthy);
        self
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Health status of an individual component
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentHealth {
    pub name: String,
    pub is_healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: true, message: None }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: false, message: Some(message.into()) }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_unhealthy_component_fails_the_check() {
        let status = HealthStatus::new()
            .add_component(ComponentHealth::healthy("profile_store"))
            .add_component(ComponentHealth::unhealthy("postal_table", "unreadable"))
            .finish();

        assert!(!status.is_healthy);
        assert_eq!(status.components.len(), 2);
    }

    #[test]
    fn no_components_is_healthy() {
        assert!(HealthStatus::new().finish().is_healthy);
    }
}
