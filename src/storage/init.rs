//! Storage initialization
//!
//! First-run setup: the data directory and the demo dataset a fresh (or
//! unreadable) ledger is seeded with.

use chrono::NaiveDate;

use crate::config::paths::MoneyioPaths;
use crate::error::LedgerError;
use crate::models::month::now;
use crate::models::{CategoryId, Money, Transaction, TransactionId, TransactionType};

/// Ensure the on-disk layout exists
pub fn initialize_storage(paths: &MoneyioPaths) -> Result<(), LedgerError> {
    paths.ensure_directories()
}

/// The fixed demo dataset, timestamped with the current instant
///
/// Returned in definition order; callers sort it.
pub fn demo_transactions() -> Vec<Transaction> {
    let now = now();
    let seed = |id: &str,
                kind: TransactionType,
                units: i64,
                (y, m, d): (i32, u32, u32),
                category: &str,
                description: &str| Transaction {
        id: TransactionId::from(id),
        kind,
        amount: Money::from_cents(units * 100),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        category_id: CategoryId::from(category),
        description: Some(description.to_string()),
        created_at: now,
        updated_at: now,
    };

    vec![
        seed(
            "seed-1",
            TransactionType::Income,
            5000,
            (2025, 1, 5),
            "cat_salary",
            "Salary",
        ),
        seed(
            "seed-2",
            TransactionType::Expense,
            1200,
            (2025, 1, 10),
            "cat_market",
            "Groceries",
        ),
        seed(
            "seed-3",
            TransactionType::Expense,
            350,
            (2025, 1, 15),
            "cat_transport",
            "Ride",
        ),
    ]
}
