//! moneyio - a personal income/expense ledger
//!
//! This library keeps a list of transactions, derives filtered views and
//! summaries from it, and persists it as a single versioned JSON envelope.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, ids, months, filters)
//! - `storage`: Key-value backends and the versioned envelope
//! - `services`: The ledger store
//! - `reports`: Filtered view, summary and chart aggregates
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `moneyio` binary
//!
//! # Example
//!
//! ```rust
//! use moneyio::services::LedgerStore;
//! use moneyio::storage::MemoryStore;
//!
//! let mut store = LedgerStore::new(MemoryStore::new());
//! store.hydrate();
//! assert_eq!(store.len(), 3);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use services::{HydrateOutcome, LedgerStore};
