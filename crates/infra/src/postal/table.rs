use std::collections::HashMap;
use std::path::Path;

use linkup_core::location::is_postal_code;
use linkup_core::PostalCodeLookup;
use linkup_domain::{LinkupError, PostalCodeEntry, PostalConfig, Result};
use tracing::{info, warn};

use crate::errors::InfraError;

/// In-memory table of five-digit postal codes and their centroids.
///
/// Loaded once at startup from a JSON array of
/// `{ "code", "lat", "lng", "city", "state" }` objects.
#[derive(Debug, Clone, Default)]
pub struct PostalCodeTable {
    entries: HashMap<String, PostalCodeEntry>,
}

impl PostalCodeTable {
    /// Build a table from entries. Rows whose code is not exactly five digits,
    /// or whose coordinates are out of range, are skipped; later rows win.
    pub fn from_entries(entries: impl IntoIterator<Item = PostalCodeEntry>) -> Self {
        let mut table = HashMap::new();
        for mut entry in entries {
            entry.code = entry.code.trim().to_string();
            if !is_postal_code(&entry.code) {
                warn!(code = %entry.code, "skipping postal row with malformed code");
                continue;
            }
            if linkup_domain::Coordinates::new(entry.lat, entry.lng).is_none() {
                warn!(code = %entry.code, "skipping postal row with invalid coordinates");
                continue;
            }
            table.insert(entry.code.clone(), entry);
        }
        Self { entries: table }
    }

    /// Parse a JSON array of postal rows.
    ///
    /// # Errors
    /// Returns `LinkupError::InvalidInput` when the document is not a valid
    /// array of rows.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rows: Vec<PostalCodeEntry> =
            serde_json::from_str(json).map_err(|e| LinkupError::from(InfraError::from(e)))?;
        Ok(Self::from_entries(rows))
    }

    /// Read and parse a table file.
    ///
    /// # Errors
    /// Returns `LinkupError::Config` when the file cannot be read, or
    /// `LinkupError::InvalidInput` when it cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LinkupError::Config(format!("Failed to read postal table {}: {}", path.display(), e))
        })?;
        let table = Self::from_json_str(&contents)?;
        info!(path = %path.display(), entries = table.len(), "postal code table loaded");
        Ok(table)
    }

    /// Load the configured table, or an empty one when no path is set.
    pub fn load(config: &PostalConfig) -> Result<Self> {
        match config.table_path.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) => Self::from_path(path),
            None => {
                info!("no postal code table configured; postal lookups will miss");
                Ok(Self::default())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PostalCodeLookup for PostalCodeTable {
    fn lookup(&self, code: &str) -> Option<PostalCodeEntry> {
        self.entries.get(code.trim()).cloned()
    }
}
