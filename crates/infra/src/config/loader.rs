//! Configuration loader
//!
//! ## Loading Strategy
//! 1. `LINKUP_CONFIG` names an explicit file: load it and stop
//! 2. Any `LINKUP_*` setting below is present: defaults overlaid with the
//!    environment
//! 3. Otherwise probe for a config file (JSON or TOML)
//! 4. Nothing found: defaults
//!
//! ## Environment Variables
//! - `LINKUP_GEOCODER_ENABLED`: Whether free-text geocoding is attempted
//! - `LINKUP_GEOCODER_URL`: Base URL of the Nominatim-compatible API
//! - `LINKUP_GEOCODER_TIMEOUT_MS`: Budget for one resolution, retries included
//! - `LINKUP_GEOCODER_MAX_ATTEMPTS`: Attempts per geocoder request
//! - `LINKUP_GEOCODER_USER_AGENT`: User agent sent to the provider
//! - `LINKUP_DEFAULT_RADIUS_MILES`: Radius for slots without one
//! - `LINKUP_POSTAL_TABLE`: Path to the postal-code JSON table
//! - `LINKUP_BIND_ADDR`: Listen address of the HTTP process
//!
//! ## File Locations
//! `linkup.json`, `linkup.toml`, `config.json`, `config.toml` in the current
//! working directory, then next to the executable.

use std::path::{Path, PathBuf};

use linkup_domain::{Config, LinkupError, Result};

const CONFIG_PATH_VAR: &str = "LINKUP_CONFIG";

const ENV_KEYS: &[&str] = &[
    "LINKUP_GEOCODER_ENABLED",
    "LINKUP_GEOCODER_URL",
    "LINKUP_GEOCODER_TIMEOUT_MS",
    "LINKUP_GEOCODER_MAX_ATTEMPTS",
    "LINKUP_GEOCODER_USER_AGENT",
    "LINKUP_DEFAULT_RADIUS_MILES",
    "LINKUP_POSTAL_TABLE",
    "LINKUP_BIND_ADDR",
];

const CONFIG_FILE_NAMES: &[&str] = &["linkup.json", "linkup.toml", "config.json", "config.toml"];

/// Load configuration with the fallback strategy described above.
///
/// # Errors
/// Returns `LinkupError::Config` for unreadable or malformed sources and for
/// values that fail [`validate`]. A missing source is not an error.
pub fn load() -> Result<Config> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_VAR) {
        return load_from_file(Some(PathBuf::from(path)));
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(LinkupError::NotFound(reason)) => {
            tracing::debug!(reason, "No environment configuration, probing for a file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::info!("No configuration source found, using defaults");
                    Ok(Config::default())
                }
            }
        }
        Err(e) => Err(e),
    }
}

/// Load configuration from `LINKUP_*` environment variables.
///
/// Unset variables keep their default.
///
/// # Errors
/// Returns `LinkupError::NotFound` when none of the variables is set, and
/// `LinkupError::Config` when a value cannot be parsed or is out of range.
pub fn load_from_env() -> Result<Config> {
    if !ENV_KEYS.iter().any(|key| std::env::var_os(key).is_some()) {
        return Err(LinkupError::NotFound("no LINKUP_* configuration variables set".into()));
    }

    let mut config = Config::default();

    if let Some(enabled) = env_bool("LINKUP_GEOCODER_ENABLED")? {
        config.geocoder.enabled = enabled;
    }
    if let Some(url) = env_string("LINKUP_GEOCODER_URL") {
        config.geocoder.base_url = url;
    }
    if let Some(timeout) = env_parse::<u64>("LINKUP_GEOCODER_TIMEOUT_MS")? {
        config.geocoder.timeout_ms = timeout;
    }
    if let Some(attempts) = env_parse::<usize>("LINKUP_GEOCODER_MAX_ATTEMPTS")? {
        config.geocoder.max_attempts = attempts;
    }
    if let Some(agent) = env_string("LINKUP_GEOCODER_USER_AGENT") {
        config.geocoder.user_agent = agent;
    }
    if let Some(radius) = env_parse::<f64>("LINKUP_DEFAULT_RADIUS_MILES")? {
        config.matching.default_radius_miles = radius;
    }
    if let Some(path) = env_string("LINKUP_POSTAL_TABLE") {
        config.postal.table_path = Some(path);
    }
    if let Some(addr) = env_string("LINKUP_BIND_ADDR") {
        config.server.bind_addr = addr;
    }

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the standard locations. Format is picked by
/// extension; missing sections and fields keep their defaults.
///
/// # Errors
/// Returns `LinkupError::Config` if the file is missing, unreadable, in an
/// unsupported format, malformed, or fails [`validate`].
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LinkupError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LinkupError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LinkupError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Reject values the engine cannot run with.
///
/// # Errors
/// Returns `LinkupError::Config` naming the offending field.
pub fn validate(config: &Config) -> Result<()> {
    let radius = config.matching.default_radius_miles;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(LinkupError::Config(format!(
            "matching.default_radius_miles must be positive, got {radius}"
        )));
    }
    if config.geocoder.timeout_ms == 0 {
        return Err(LinkupError::Config("geocoder.timeout_ms must be positive".into()));
    }
    if config.geocoder.max_attempts == 0 {
        return Err(LinkupError::Config("geocoder.max_attempts must be at least 1".into()));
    }
    if config.geocoder.enabled && url::Url::parse(&config.geocoder.base_url).is_err() {
        return Err(LinkupError::Config(format!(
            "geocoder.base_url is not an absolute URL: {}",
            config.geocoder.base_url
        )));
    }
    Ok(())
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LinkupError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LinkupError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(LinkupError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a config file.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_string(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| LinkupError::Config(format!("Invalid value for {key} ({raw:?}): {e}")))
        })
        .transpose()
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
fn env_bool(key: &str) -> Result<Option<bool>> {
    env_string(key)
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(LinkupError::Config(format!(
                "Invalid value for {key} ({raw:?}): expected a boolean"
            ))),
        })
        .transpose()
}
