//! Key-value backends
//!
//! The ledger persists into one logical slot addressed by a string key, the
//! way a browser's local storage works. [`KeyValueStore`] is that slot
//! abstraction; [`MemoryStore`] keeps values in process and [`FileStore`]
//! keeps one JSON file per key on disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

use super::file_io::{read_text, write_atomic};

/// A string-keyed slot of text values
pub trait KeyValueStore {
    /// Current value under `key`, `None` if never written or removed
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()>;

    /// Drop the value under `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> LedgerResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> LedgerResult<()> {
        (**self).remove(key)
    }
}

/// In-process backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> LedgerResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// On-disk backend storing `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> LedgerResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Characters outside `[A-Za-z0-9._-]` become `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        read_text(self.path_for(key))
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        write_atomic(self.path_for(key), value.as_bytes())
    }

    fn remove(&mut self, key: &str) -> LedgerResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                LedgerError::Storage(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}
