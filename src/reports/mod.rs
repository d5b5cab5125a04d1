//! Reports module for moneyio
//!
//! The filtered ledger view, its summary, and chart aggregates.

pub mod charts;
pub mod summary;

pub use charts::{daily_flow, expenses_by_category, CategoryTotal, DailyFlowEntry};
pub use summary::{compute_summary, filter_transactions, Summary};
