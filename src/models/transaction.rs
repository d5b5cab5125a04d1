//! Transaction model
//!
//! A transaction is one income or expense event. The amount is always
//! positive; direction comes from [`TransactionType`] alone.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of a money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, never changes after creation
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Always positive
    pub amount: Money,

    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Soft reference into the category catalog
    pub category_id: CategoryId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Description or the empty string
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.description_or_empty(),
            self.amount
        )
    }
}

/// Ledger order: newest date first, then most recently updated first
pub fn ledger_order(a: &Transaction, b: &Transaction) -> Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| b.updated_at.cmp(&a.updated_at))
}

/// Sort a collection into ledger order. The sort is stable.
pub fn sort_ledger(items: &mut [Transaction]) {
    items.sort_by(ledger_order);
}

/// Check that a collection is in ledger order
pub fn is_ledger_sorted(items: &[Transaction]) -> bool {
    items
        .windows(2)
        .all(|pair| ledger_order(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Trim a description, mapping blank text to `None`
pub fn clean_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

/// Input for creating a new transaction
///
/// `amount` is taken as given; the store stores its normalized absolute value.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInput {
    pub kind: TransactionType,
    pub amount: f64,
    pub date: NaiveDate,
    pub category_id: CategoryId,
    pub description: Option<String>,
}

impl TransactionInput {
    pub fn new(
        kind: TransactionType,
        amount: f64,
        date: NaiveDate,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        Self {
            kind,
            amount,
            date,
            category_id: category_id.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub kind: Option<TransactionType>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub category_id: Option<CategoryId>,
    pub description: Option<String>,
}

impl TransactionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn category(mut self, category_id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
