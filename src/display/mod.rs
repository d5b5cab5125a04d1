//! Display formatting for terminal output
//!
//! Ledger tables, summaries and text charts. Every formatter returns a
//! `String`; printing is left to the CLI layer.

pub mod report;
pub mod transaction;

pub use report::{format_category_chart, format_daily_flow, format_summary};
pub use transaction::{format_transaction_details, format_transaction_table};

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::models::month::ISO_DATE_FORMAT;

/// Render `date` with a user strftime pattern, falling back to ISO when the
/// pattern is invalid
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let valid = !pattern.is_empty()
        && StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error));
    if valid {
        date.format(pattern).to_string()
    } else {
        date.format(ISO_DATE_FORMAT).to_string()
    }
}

/// Shorten `s` to at most `max` characters, marking the cut with `…`
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(date, "%Y-%m-%d"), "2025-01-05");
        assert_eq!(format_date(date, "%d/%m/%Y"), "05/01/2025");
        assert_eq!(format_date(date, "%Q"), "2025-01-05");
        assert_eq!(format_date(date, ""), "2025-01-05");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 6), "a lon…");
        assert_eq!(truncate("café au lait", 5), "café…");
    }
}
