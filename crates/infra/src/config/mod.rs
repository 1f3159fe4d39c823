//! Configuration loading
//!
//! Builds the domain `Config` from `LINKUP_*` environment variables or a
//! JSON/TOML file, falling back to defaults.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths, validate};
