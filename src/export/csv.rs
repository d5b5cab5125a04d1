//! CSV export of a ledger snapshot

use std::io::Write;

use chrono::SecondsFormat;
use csv::{QuoteStyle, WriterBuilder};
use tracing::debug;

use crate::error::LedgerResult;
use crate::models::Transaction;

/// Column header, in output order
pub const CSV_HEADER: [&str; 8] = [
    "id",
    "type",
    "amount",
    "date",
    "categoryId",
    "description",
    "createdAt",
    "updatedAt",
];

/// Write `snapshot` as CSV and return the number of rows written
///
/// Every field is quoted. An empty snapshot writes nothing, not even the
/// header.
pub fn export_transactions_csv<'a, I, W>(snapshot: I, writer: W) -> LedgerResult<usize>
where
    I: IntoIterator<Item = &'a Transaction>,
    W: Write,
{
    let mut rows = snapshot.into_iter().peekable();
    if rows.peek().is_none() {
        return Ok(0);
    }

    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);
    csv.write_record(CSV_HEADER)?;

    let mut count = 0;
    for txn in rows {
        csv.write_record([
            txn.id.as_str(),
            txn.kind.as_str(),
            txn.amount.format_plain().as_str(),
            txn.date.to_string().as_str(),
            txn.category_id.as_str(),
            txn.description_or_empty(),
            txn.created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true)
                .as_str(),
            txn.updated_at
                .to_rfc3339_opts(SecondsFormat::Millis, true)
                .as_str(),
        ])?;
        count += 1;
    }
    csv.flush()?;

    debug!(rows = count, "transactions exported");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, TransactionId, TransactionType};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample(description: Option<&str>) -> Transaction {
        let at = Utc.with_ymd_and_hms(2025, 1, 10, 12, 30, 0).unwrap();
        Transaction {
            id: TransactionId::from("txn_1"),
            kind: TransactionType::Expense,
            amount: Money::from_cents(1_250),
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            category_id: CategoryId::from("cat_food"),
            description: description.map(String::from),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_export_quotes_every_field() {
        let items = vec![sample(Some("Pizza, \"large\""))];
        let mut out = Vec::new();

        let rows = export_transactions_csv(&items, &mut out).unwrap();
        assert_eq!(rows, 1);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            r#""id","type","amount","date","categoryId","description","createdAt","updatedAt""#
        );
        assert_eq!(
            lines[1],
            r#""txn_1","expense","12.50","2025-01-10","cat_food","Pizza, ""large""","2025-01-10T12:30:00.000Z","2025-01-10T12:30:00.000Z""#
        );
    }

    #[test]
    fn test_missing_description_is_empty_field() {
        let items = vec![sample(None)];
        let mut out = Vec::new();
        export_transactions_csv(&items, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(r#""cat_food","","#));
    }

    #[test]
    fn test_empty_snapshot_writes_nothing() {
        let mut out = Vec::new();
        let rows = export_transactions_csv(&Vec::<Transaction>::new(), &mut out).unwrap();
        assert_eq!(rows, 0);
        assert!(out.is_empty());
    }
}
