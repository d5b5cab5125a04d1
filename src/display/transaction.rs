//! Transaction display formatting
//!
//! The ledger table and the single-transaction detail view.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::{format_date, truncate};
use crate::models::{CategoryCatalog, Transaction};

const DESCRIPTION_WIDTH: usize = 32;

/// One ledger table row
#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, catalog: &CategoryCatalog, symbol: &str, date_format: &str) -> Self {
        let amount = if txn.is_expense() {
            format!("-{}", txn.amount.format_with_symbol(symbol))
        } else {
            txn.amount.format_with_symbol(symbol)
        };

        Self {
            id: txn.id.to_string(),
            date: format_date(txn.date, date_format),
            kind: txn.kind.to_string(),
            category: catalog.name_for(&txn.category_id).to_string(),
            description: truncate(txn.description_or_empty(), DESCRIPTION_WIDTH),
            amount,
        }
    }
}

/// Format transactions as a table, in the order given
pub fn format_transaction_table(
    transactions: &[&Transaction],
    catalog: &CategoryCatalog,
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| TransactionRow::new(txn, catalog, symbol, date_format));

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    catalog: &CategoryCatalog,
    symbol: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Date:        {}\n",
        format_date(txn.date, date_format)
    ));
    output.push_str(&format!(
        "Category:    {}\n",
        catalog.name_for(&txn.category_id)
    ));
    if let Some(description) = &txn.description {
        output.push_str(&format!("Description: {}\n", description));
    }
    output.push_str(&format!("Created:     {}\n", txn.created_at.to_rfc3339()));
    output.push_str(&format!("Updated:     {}\n", txn.updated_at.to_rfc3339()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::demo_transactions;

    #[test]
    fn test_table_lists_every_row() {
        let demo = demo_transactions();
        let refs: Vec<&Transaction> = demo.iter().collect();
        let output =
            format_transaction_table(&refs, &CategoryCatalog::default(), "$", "%Y-%m-%d");

        assert!(output.contains("Description"));
        assert!(output.contains("seed-1"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("$5000.00"));
        assert!(output.contains("-$350.00"));
    }

    #[test]
    fn test_empty_table() {
        let output = format_transaction_table(&[], &CategoryCatalog::default(), "$", "%Y-%m-%d");
        assert_eq!(output, "No transactions found.\n");
    }

    #[test]
    fn test_details_resolve_category_name() {
        let demo = demo_transactions();
        let output =
            format_transaction_details(&demo[2], &CategoryCatalog::default(), "R$", "%d/%m/%Y");

        assert!(output.contains("Transaction: seed-3"));
        assert!(output.contains("Amount:      R$350.00"));
        assert!(output.contains("Date:        15/01/2025"));
        assert!(output.contains("Category:    Transport"));
        assert!(output.contains("Description: Ride"));
    }
}
