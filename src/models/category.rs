//! Category catalog
//!
//! The catalog is read-only reference data. The ledger only ever asks it for
//! a display name; ids it does not know resolve to themselves.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ids::CategoryId;

/// A category label a transaction can be tagged with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Built-in categories shipped with the application
const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("cat_market", "Groceries"),
    ("cat_transport", "Transport"),
    ("cat_food", "Food"),
    ("cat_health", "Health"),
    ("cat_leisure", "Leisure"),
    ("cat_education", "Education"),
    ("cat_bills", "Bills"),
    ("cat_loan", "Loan"),
    ("cat_salary", "Salary"),
    ("cat_freelancing", "Freelancing"),
    ("cat_contract", "Contract"),
    ("cat_other", "Other"),
];

/// Ordered list of categories with id lookup
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
    names: HashMap<CategoryId, usize>,
}

impl CategoryCatalog {
    /// Build a catalog; on duplicate ids the first entry wins
    pub fn new(categories: Vec<Category>) -> Self {
        let mut names = HashMap::new();
        for (i, c) in categories.iter().enumerate() {
            names.entry(c.id.clone()).or_insert(i);
        }
        Self { categories, names }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Display name for `id`, or the raw id when it is unknown
    pub fn name_for<'a>(&'a self, id: &'a CategoryId) -> &'a str {
        self.get(id).map(|c| c.name.as_str()).unwrap_or(id.as_str())
    }

    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.names.get(id).map(|&i| &self.categories[i])
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.names.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(id, name)| Category::new(*id, *name))
                .collect(),
        )
    }
}
