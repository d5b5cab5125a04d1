//! User settings for moneyio
//!
//! Stored as JSON next to the data directory. Every field has a default, so
//! older or hand-edited files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::MoneyioPaths;
use crate::error::LedgerError;
use crate::storage::envelope::STORAGE_KEY;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for moneyio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Key the ledger is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Treat a stored empty ledger like a missing one and reseed it
    #[serde(default)]
    pub reseed_when_empty: bool,

    /// Default `tracing` filter when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_filter() -> String {
    "moneyio=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            storage_key: default_storage_key(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            reseed_when_empty: false,
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    ///
    /// Defaults are not written; the caller decides when to persist.
    pub fn load_or_create(paths: &MoneyioPaths) -> Result<Self, LedgerError> {
        read_json(paths.settings_file())
            .map_err(|e| LedgerError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MoneyioPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
