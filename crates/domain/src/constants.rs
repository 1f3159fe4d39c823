//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Slot defaults
pub const DEFAULT_START_TIME: &str = "18:00";
pub const DEFAULT_END_TIME: &str = "21:00";
pub const DEFAULT_RADIUS_MILES: f64 = 5.0;

// Geodesy
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

// Postal codes handled by the static lookup table (US ZIP)
pub const POSTAL_CODE_LENGTH: usize = 5;

// Geocoder configuration
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_GEOCODER_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_GEOCODER_MAX_ATTEMPTS: usize = 2;
pub const DEFAULT_USER_AGENT: &str = "linkup/0.1";

// Server configuration
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
