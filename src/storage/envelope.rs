//! Versioned storage envelope
//!
//! Every persisted value is wrapped as `{version, savedAt, data}` and always
//! read and written as a whole. Reading is strict: anything that is not a
//! well-formed envelope of exactly the expected version counts as absent.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};

use super::backend::KeyValueStore;

/// Key the transaction collection is stored under
pub const STORAGE_KEY: &str = "moneyio.transactions";

/// Current envelope version; any other stored version reads as absent
pub const STORAGE_VERSION: u32 = 1;

/// Wrapper persisted around a payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageEnvelope<T> {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub data: T,
}

/// What a read actually found
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome<T> {
    Loaded(T),
    /// Nothing stored under the key
    Missing,
    /// The backend itself failed
    Unreadable(String),
    /// Stored text is not a well-formed envelope
    Corrupt(String),
    VersionMismatch { found: u64, expected: u32 },
}

impl<T> ReadOutcome<T> {
    /// Collapse to the public contract: data, or absent
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Read the envelope under `key` and report what was found
pub fn read_envelope<T, S>(store: &S, key: &str, expected_version: u32) -> ReadOutcome<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return ReadOutcome::Missing,
        Err(err) => return ReadOutcome::Unreadable(err.to_string()),
    };

    let value: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => return ReadOutcome::Corrupt(format!("invalid JSON: {}", err)),
    };

    let Some(object) = value.as_object() else {
        return ReadOutcome::Corrupt("envelope is not an object".into());
    };

    let Some(found) = object.get("version").and_then(Value::as_u64) else {
        return ReadOutcome::Corrupt("missing or non-integer version".into());
    };

    if found != u64::from(expected_version) {
        return ReadOutcome::VersionMismatch {
            found,
            expected: expected_version,
        };
    }

    match serde_json::from_value::<StorageEnvelope<T>>(value) {
        Ok(envelope) => ReadOutcome::Loaded(envelope.data),
        Err(err) => ReadOutcome::Corrupt(format!("malformed envelope: {}", err)),
    }
}

/// Read the payload under `key`, or `None` for any kind of absence
pub fn read<T, S>(store: &S, key: &str, expected_version: u32) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    read_envelope(store, key, expected_version).into_data()
}

/// Overwrite the slot under `key` with a fresh envelope around `data`
pub fn write<T, S>(store: &mut S, key: &str, version: u32, data: &T) -> LedgerResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let envelope = StorageEnvelope {
        version,
        saved_at: Utc::now(),
        data,
    };
    let text = serde_json::to_string(&envelope)
        .map_err(|e| LedgerError::Storage(format!("Failed to serialize envelope: {}", e)))?;
    store.set(key, &text)?;
    debug!(key, version, bytes = text.len(), "envelope written");
    Ok(())
}
