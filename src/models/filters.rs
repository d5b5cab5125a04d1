//! Filter state for the ledger view
//!
//! Filters are per-session state: they live on the store but are never
//! persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::CategoryId;
use super::month::MonthKey;
use super::transaction::TransactionType;
use crate::error::LedgerError;

/// Type filter: one direction or all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionType::Income,
            Self::Expense => kind == TransactionType::Expense,
        }
    }
}

impl From<TransactionType> for TypeFilter {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Income => Self::Income,
            TransactionType::Expense => Self::Expense,
        }
    }
}

impl From<Option<TransactionType>> for TypeFilter {
    fn from(kind: Option<TransactionType>) -> Self {
        kind.map(Self::from).unwrap_or_default()
    }
}

impl FromStr for TypeFilter {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::Validation(format!(
                "Invalid type filter '{}': expected income, expense or all",
                other
            ))),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Income => f.write_str("income"),
            Self::Expense => f.write_str("expense"),
        }
    }
}

/// Category filter: one category id or all
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryId),
}

impl CategoryFilter {
    pub fn matches(&self, category_id: &CategoryId) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => id == category_id,
        }
    }
}

impl From<Option<CategoryId>> for CategoryFilter {
    fn from(id: Option<CategoryId>) -> Self {
        id.map(Self::Only).unwrap_or_default()
    }
}

impl From<&str> for CategoryFilter {
    /// `"all"` selects every category, anything else one id
    fn from(s: &str) -> Self {
        if s == "all" {
            Self::All
        } else {
            Self::Only(CategoryId::from(s))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(id) => write!(f, "{}", id),
        }
    }
}

/// The complete filter state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    /// Required month bucket
    pub month: MonthKey,
    /// Case-insensitive description substring; empty means no search
    pub search: String,
    pub kind: TypeFilter,
    pub category: CategoryFilter,
}

impl Filters {
    /// Filters for `month` with every optional filter cleared
    pub fn for_month(month: MonthKey) -> Self {
        Self {
            month,
            search: String::new(),
            kind: TypeFilter::All,
            category: CategoryFilter::All,
        }
    }

    /// Apply a patch, replacing only the fields it sets
    pub fn apply(&mut self, patch: FiltersPatch) {
        if let Some(month) = patch.month {
            self.month = month;
        }
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }

    /// Reset search, type and category; month is kept
    pub fn clear_optional(&mut self) {
        *self = Self::for_month(self.month);
    }

    pub fn has_optional(&self) -> bool {
        !self.search.trim().is_empty()
            || self.kind != TypeFilter::All
            || self.category != CategoryFilter::All
    }
}

impl Default for Filters {
    /// Current calendar month, nothing else
    fn default() -> Self {
        Self::for_month(MonthKey::current())
    }
}

/// Partial filter update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FiltersPatch {
    pub month: Option<MonthKey>,
    pub search: Option<String>,
    pub kind: Option<TypeFilter>,
    pub category: Option<CategoryFilter>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan() -> MonthKey {
        MonthKey::new(2025, 1).unwrap()
    }

    #[test]
    fn test_default_is_current_month_without_optionals() {
        let filters = Filters::default();
        assert_eq!(filters.month, MonthKey::current());
        assert!(filters.search.is_empty());
        assert_eq!(filters.kind, TypeFilter::All);
        assert_eq!(filters.category, CategoryFilter::All);
        assert!(!filters.has_optional());
    }

    #[test]
    fn test_apply_patch_touches_only_set_fields() {
        let mut filters = Filters::for_month(jan());
        filters.search = "rent".into();

        filters.apply(FiltersPatch {
            kind: Some(TypeFilter::Expense),
            ..Default::default()
        });

        assert_eq!(filters.month, jan());
        assert_eq!(filters.search, "rent");
        assert_eq!(filters.kind, TypeFilter::Expense);
        assert_eq!(filters.category, CategoryFilter::All);
    }

    #[test]
    fn test_clear_optional_keeps_month() {
        let mut filters = Filters::for_month(jan());
        filters.search = "uber".into();
        filters.kind = TypeFilter::Income;
        filters.category = CategoryFilter::from("cat_salary");
        assert!(filters.has_optional());

        filters.clear_optional();
        assert_eq!(filters, Filters::for_month(jan()));
    }

    #[test]
    fn test_type_filter_parse_and_match() {
        assert_eq!("Income".parse::<TypeFilter>().unwrap(), TypeFilter::Income);
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert!("transfer".parse::<TypeFilter>().is_err());

        assert!(TypeFilter::All.matches(TransactionType::Expense));
        assert!(TypeFilter::Expense.matches(TransactionType::Expense));
        assert!(!TypeFilter::Income.matches(TransactionType::Expense));
    }

    #[test]
    fn test_category_filter() {
        let id = CategoryId::from("cat_market");
        assert!(CategoryFilter::All.matches(&id));
        assert!(CategoryFilter::from("cat_market").matches(&id));
        assert!(!CategoryFilter::from("cat_food").matches(&id));
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
    }
}
