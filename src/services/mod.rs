//! Service layer for moneyio
//!
//! The ledger store sits on top of the storage layer and owns the
//! transaction collection plus the filter state.

pub mod ledger;

pub use ledger::{HydrateOutcome, LedgerStore, SeedReason};
