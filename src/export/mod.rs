//! Export module for moneyio
//!
//! CSV export of the transactions currently in view.

pub mod csv;

pub use self::csv::{export_transactions_csv, CSV_HEADER};
