//! Chart aggregation
//!
//! Groups transactions for the two ledger charts: expense totals per category
//! name and income/expense per day.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{CategoryCatalog, Money, Transaction};

/// Total spent under one category name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub value: Money,
}

/// Income and expense booked on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyFlowEntry {
    pub date: NaiveDate,
    pub income: Money,
    pub expense: Money,
}

/// Expense totals grouped by resolved category name
///
/// Income is ignored. Ids missing from `catalog` group under the raw id.
/// Categories that share a display name are summed together. Output follows
/// the first appearance of each name in `transactions`.
pub fn expenses_by_category<'a, I>(transactions: I, catalog: &CategoryCatalog) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for txn in transactions.into_iter().filter(|t| t.is_expense()) {
        let name = catalog.name_for(&txn.category_id);
        match index.get(name) {
            Some(&i) => totals[i].value += txn.amount,
            None => {
                index.insert(name.to_string(), totals.len());
                totals.push(CategoryTotal {
                    name: name.to_string(),
                    value: txn.amount,
                });
            }
        }
    }

    totals
}

/// Income and expense per distinct date, ascending
///
/// Days without transactions are not filled in.
pub fn daily_flow<'a, I>(transactions: I) -> Vec<DailyFlowEntry>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut days: BTreeMap<NaiveDate, (Money, Money)> = BTreeMap::new();

    for txn in transactions {
        let (income, expense) = days.entry(txn.date).or_default();
        if txn.is_income() {
            *income += txn.amount;
        } else {
            *expense += txn.amount;
        }
    }

    days.into_iter()
        .map(|(date, (income, expense))| DailyFlowEntry {
            date,
            income,
            expense,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryId, TransactionId, TransactionType};
    use crate::reports::summary::compute_summary;
    use crate::storage::demo_transactions;
    use chrono::Utc;

    fn txn(kind: TransactionType, cents: i64, day: u32, category: &str) -> Transaction {
        let now = Utc::now();
        Transaction {
            id: TransactionId::generate(),
            kind,
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            category_id: CategoryId::from(category),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_expenses_by_category_demo() {
        let demo = demo_transactions();
        let totals = expenses_by_category(&demo, &CategoryCatalog::default());

        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    name: "Groceries".into(),
                    value: Money::from_cents(120_000),
                },
                CategoryTotal {
                    name: "Transport".into(),
                    value: Money::from_cents(35_000),
                },
            ]
        );
    }

    #[test]
    fn test_category_totals_match_summary_expense() {
        let demo = demo_transactions();
        let totals = expenses_by_category(&demo, &CategoryCatalog::default());

        let charted: Money = totals.iter().map(|t| t.value).sum();
        assert_eq!(charted, compute_summary(&demo).expense);
        assert_eq!(charted.cents(), 155_000);
    }

    #[test]
    fn test_unknown_category_uses_raw_id() {
        let items = vec![txn(TransactionType::Expense, 500, 1, "cat_mystery")];
        let totals = expenses_by_category(&items, &CategoryCatalog::default());
        assert_eq!(totals[0].name, "cat_mystery");
        assert_eq!(totals[0].value.cents(), 500);
    }

    #[test]
    fn test_shared_names_are_merged() {
        let catalog = CategoryCatalog::new(vec![
            Category::new("cat_a", "Food"),
            Category::new("cat_b", "Food"),
            Category::new("cat_c", "Bills"),
        ]);
        let items = vec![
            txn(TransactionType::Expense, 110, 1, "cat_c"),
            txn(TransactionType::Expense, 101, 2, "cat_a"),
            txn(TransactionType::Income, 9_999, 2, "cat_a"),
            txn(TransactionType::Expense, 202, 3, "cat_b"),
        ];

        let totals = expenses_by_category(&items, &catalog);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].name, "Bills");
        assert_eq!(totals[1].name, "Food");
        assert_eq!(totals[1].value.cents(), 303);
    }

    #[test]
    fn test_no_expenses_gives_empty_chart() {
        let items = vec![txn(TransactionType::Income, 100, 1, "cat_salary")];
        assert!(expenses_by_category(&items, &CategoryCatalog::default()).is_empty());
    }

    #[test]
    fn test_daily_flow_groups_and_sorts() {
        let items = vec![
            txn(TransactionType::Expense, 300, 9, "cat_food"),
            txn(TransactionType::Income, 1_000, 2, "cat_salary"),
            txn(TransactionType::Expense, 150, 9, "cat_food"),
            txn(TransactionType::Income, 25, 9, "cat_other"),
        ];

        let flow = daily_flow(&items);
        assert_eq!(flow.len(), 2);
        assert_eq!(flow[0].date, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(flow[0].income.cents(), 1_000);
        assert!(flow[0].expense.is_zero());
        assert_eq!(flow[1].income.cents(), 25);
        assert_eq!(flow[1].expense.cents(), 450);
    }

    #[test]
    fn test_daily_flow_demo() {
        let flow = daily_flow(&demo_transactions());
        let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();

        assert_eq!(
            flow,
            vec![
                DailyFlowEntry {
                    date: day(5),
                    income: Money::from_cents(500_000),
                    expense: Money::zero(),
                },
                DailyFlowEntry {
                    date: day(10),
                    income: Money::zero(),
                    expense: Money::from_cents(120_000),
                },
                DailyFlowEntry {
                    date: day(15),
                    income: Money::zero(),
                    expense: Money::from_cents(35_000),
                },
            ]
        );
    }

    #[test]
    fn test_daily_flow_serializes_iso_dates() {
        let items = vec![txn(TransactionType::Expense, 1_250, 5, "cat_food")];
        let json = serde_json::to_value(daily_flow(&items)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "date": "2025-01-05", "income": 0, "expense": 12.5 }])
        );
    }
}
