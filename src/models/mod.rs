//! Core data models for moneyio
//!
//! Transactions, the money type, ids, month keys, filters and the category
//! catalog.

pub mod category;
pub mod filters;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use category::{Category, CategoryCatalog};
pub use filters::{CategoryFilter, Filters, FiltersPatch, TypeFilter};
pub use ids::{generate_id, CategoryId, TransactionId};
pub use money::{normalize, Money};
pub use month::MonthKey;
pub use transaction::{
    is_ledger_sorted, sort_ledger, Transaction, TransactionInput, TransactionPatch,
    TransactionType,
};
