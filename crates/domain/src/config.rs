//! Configuration structures
//!
//! Every section has defaults so a partial file (or none at all) still
//! yields a usable configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_GEOCODER_MAX_ATTEMPTS, DEFAULT_GEOCODER_TIMEOUT_MS,
    DEFAULT_GEOCODER_URL, DEFAULT_RADIUS_MILES, DEFAULT_USER_AGENT,
};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geocoder: GeocoderConfig,
    pub matching: MatchingConfig,
    pub postal: PostalConfig,
    pub server: ServerConfig,
}

/// External geocoding provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    pub enabled: bool,
    pub base_url: String,
    /// Upper bound for one resolution, retries included
    pub timeout_ms: u64,
    pub max_attempts: usize,
    pub user_agent: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_GEOCODER_URL.to_string(),
            timeout_ms: DEFAULT_GEOCODER_TIMEOUT_MS,
            max_attempts: DEFAULT_GEOCODER_MAX_ATTEMPTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub default_radius_miles: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self { default_radius_miles: DEFAULT_RADIUS_MILES }
    }
}

/// Static postal-code table settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalConfig {
    /// JSON file with `[{code, lat, lng, city, state}]`; empty table when unset
    pub table_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR.to_string() }
    }
}
