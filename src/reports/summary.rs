//! Filtered view and summary
//!
//! Pure functions over a transaction collection; nothing here touches storage.

use serde::Serialize;

use crate::models::{Filters, Money, Transaction};

/// Income, expense and balance of a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

/// Whether `txn` passes every active filter
pub fn matches_filters(txn: &Transaction, filters: &Filters, needle: &str) -> bool {
    filters.month.contains(txn.date)
        && filters.kind.matches(txn.kind)
        && filters.category.matches(&txn.category_id)
        && (needle.is_empty() || txn.description_or_empty().to_lowercase().contains(needle))
}

/// The subsequence of `items` passing `filters`, order preserved
pub fn filter_transactions<'a>(items: &'a [Transaction], filters: &Filters) -> Vec<&'a Transaction> {
    let needle = filters.search.trim().to_lowercase();
    items
        .iter()
        .filter(|txn| matches_filters(txn, filters, &needle))
        .collect()
}

/// Totals of `items`
///
/// Amounts are whole cents, so each total is already rounded to two decimals
/// and the balance is taken from the rounded totals.
pub fn compute_summary<'a, I>(items: I) -> Summary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let (income, expense) = items
        .into_iter()
        .fold((Money::zero(), Money::zero()), |(inc, exp), txn| {
            if txn.is_income() {
                (inc + txn.amount, exp)
            } else {
                (inc, exp + txn.amount)
            }
        });

    Summary {
        income,
        expense,
        balance: income - expense,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CategoryFilter, CategoryId, MonthKey, TransactionId, TransactionType, TypeFilter,
    };
    use crate::storage::demo_transactions;
    use chrono::{NaiveDate, Utc};

    fn txn(id: &str, kind: TransactionType, cents: i64, date: (i32, u32, u32)) -> Transaction {
        let now = Utc::now();
        Transaction {
            id: TransactionId::from(id),
            kind,
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category_id: CategoryId::from("cat_other"),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn january() -> Filters {
        Filters::for_month(MonthKey::new(2025, 1).unwrap())
    }

    #[test]
    fn test_demo_summary() {
        let demo = demo_transactions();
        let visible = filter_transactions(&demo, &january());
        assert_eq!(visible.len(), 3);

        let summary = compute_summary(visible);
        assert_eq!(summary.income.cents(), 500_000);
        assert_eq!(summary.expense.cents(), 155_000);
        assert_eq!(summary.balance.cents(), 345_000);
    }

    #[test]
    fn test_month_filter() {
        let demo = demo_transactions();
        let filters = Filters::for_month(MonthKey::new(2025, 2).unwrap());
        assert!(filter_transactions(&demo, &filters).is_empty());
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let demo = demo_transactions();
        let mut filters = january();
        filters.search = "  GROC ".into();

        let visible = filter_transactions(&demo, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "seed-2");

        filters.search = "   ".into();
        assert_eq!(filter_transactions(&demo, &filters).len(), 3);
    }

    #[test]
    fn test_search_treats_missing_description_as_empty() {
        let items = vec![txn("a", TransactionType::Expense, 100, (2025, 1, 1))];
        let mut filters = january();
        filters.search = "x".into();
        assert!(filter_transactions(&items, &filters).is_empty());
    }

    #[test]
    fn test_type_and_category_filters() {
        let demo = demo_transactions();
        let mut filters = january();
        filters.kind = TypeFilter::Expense;
        let ids: Vec<&str> = filter_transactions(&demo, &filters)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["seed-2", "seed-3"]);

        filters.category = CategoryFilter::from("cat_transport");
        let visible = filter_transactions(&demo, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "seed-3");
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = vec![
            txn("c", TransactionType::Expense, 1, (2025, 1, 3)),
            txn("a", TransactionType::Income, 1, (2025, 1, 9)),
            txn("b", TransactionType::Expense, 1, (2025, 1, 1)),
        ];
        let ids: Vec<&str> = filter_transactions(&items, &january())
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_summary_of_nothing_is_zero() {
        assert_eq!(compute_summary(&Vec::<Transaction>::new()), Summary::default());
    }

    #[test]
    fn test_negative_balance() {
        let items = vec![
            txn("a", TransactionType::Income, 1_001, (2025, 1, 1)),
            txn("b", TransactionType::Expense, 2_002, (2025, 1, 2)),
            txn("c", TransactionType::Expense, 333, (2025, 1, 3)),
        ];
        let summary = compute_summary(&items);
        assert_eq!(summary.income.cents(), 1_001);
        assert_eq!(summary.expense.cents(), 2_335);
        assert_eq!(summary.balance.cents(), -1_334);
    }

    #[test]
    fn test_summary_serializes_as_numbers() {
        let items = vec![txn("a", TransactionType::Income, 1_250, (2025, 1, 1))];
        let json = serde_json::to_value(compute_summary(&items)).unwrap();
        assert_eq!(json["income"], serde_json::json!(12.5));
        assert_eq!(json["expense"], serde_json::json!(0));
        assert_eq!(json["balance"], serde_json::json!(12.5));
    }
}
