//! Report formatting utilities for terminal output
//!
//! Summary block plus text renderings of the two ledger charts.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format_date;
use crate::models::{Filters, Money};
use crate::reports::{CategoryTotal, DailyFlowEntry, Summary};

const BAR_WIDTH: usize = 24;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: Money, max_value: Money, width: usize) -> String {
    if !max_value.is_positive() || !value.is_positive() {
        return " ".repeat(width);
    }

    let ratio = value.cents() as f64 / max_value.cents() as f64;
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Describe the active filters in one line
pub fn format_filters(filters: &Filters) -> String {
    let mut parts = vec![format!("month {}", filters.month)];
    if !filters.search.trim().is_empty() {
        parts.push(format!("search \"{}\"", filters.search.trim()));
    }
    parts.push(format!("type {}", filters.kind));
    parts.push(format!("category {}", filters.category));
    parts.join(", ")
}

/// Format the income / expense / balance block
pub fn format_summary(summary: &Summary, filters: &Filters, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Summary ({})\n", format_filters(filters)));
    output.push_str(&format!(
        "  Income:  {:>14}\n",
        summary.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Expense: {:>14}\n",
        summary.expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Balance: {:>14}\n",
        summary.balance.format_with_symbol(symbol)
    ));
    output
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format expense totals by category with proportional bars
pub fn format_category_chart(totals: &[CategoryTotal], symbol: &str) -> String {
    if totals.is_empty() {
        return "No expenses in this view.\n".to_string();
    }

    let total: Money = totals.iter().map(|t| t.value).sum();
    let max = totals.iter().map(|t| t.value).max().unwrap_or_default();

    let rows = totals.iter().map(|t| {
        let share = if total.is_positive() {
            t.value.cents() as f64 / total.cents() as f64 * 100.0
        } else {
            0.0
        };
        CategoryRow {
            name: t.name.clone(),
            amount: t.value.format_with_symbol(symbol),
            share: format_percentage(share),
            bar: format_bar(t.value, max, BAR_WIDTH),
        }
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..3)).with(Alignment::right()));

    format!("{}\n", table)
}

#[derive(Tabled)]
struct DailyRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Net")]
    net: String,
}

/// Format per-day income and expense
pub fn format_daily_flow(entries: &[DailyFlowEntry], symbol: &str, date_format: &str) -> String {
    if entries.is_empty() {
        return "No transactions in this view.\n".to_string();
    }

    let rows = entries.iter().map(|e| DailyRow {
        date: format_date(e.date, date_format),
        income: e.income.format_with_symbol(symbol),
        expense: e.expense.format_with_symbol(symbol),
        net: (e.income - e.expense).format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    format!("{}\n", table)
}
