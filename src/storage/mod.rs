//! Storage layer for moneyio
//!
//! A versioned JSON envelope persisted into one key-value slot, with an
//! in-memory backend and an atomic-write file backend.

pub mod backend;
pub mod envelope;
pub mod file_io;
pub mod init;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use envelope::{
    read, read_envelope, write, ReadOutcome, StorageEnvelope, STORAGE_KEY, STORAGE_VERSION,
};
pub use file_io::{read_json, write_json_atomic};
pub use init::{demo_transactions, initialize_storage};

use crate::config::paths::MoneyioPaths;
use crate::error::LedgerError;

/// Open the file backend under the configured data directory
pub fn open_file_store(paths: &MoneyioPaths) -> Result<FileStore, LedgerError> {
    paths.ensure_directories()?;
    FileStore::new(paths.data_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyioPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = open_file_store(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(store.dir(), paths.data_dir().as_path());
    }
}
