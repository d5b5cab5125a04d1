//! CLI commands for reports
//!
//! Summary, charts and CSV export of the filtered ledger view.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use super::{apply_filter_args, CliContext, FilterArgs};
use crate::display::{format_category_chart, format_daily_flow, format_summary};
use crate::error::{LedgerError, LedgerResult};
use crate::export::export_transactions_csv;
use crate::reports::{daily_flow, expenses_by_category};
use crate::services::LedgerStore;
use crate::storage::KeyValueStore;

/// Which chart to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Expense totals by category
    Categories,
    /// Income and expense per day
    Daily,
}

/// Handle `summary`
pub fn handle_summary_command<S: KeyValueStore>(
    store: &mut LedgerStore<S>,
    ctx: &CliContext<'_>,
    filters: &FilterArgs,
) -> LedgerResult<()> {
    apply_filter_args(store, filters)?;
    let summary = store.visible_summary();
    print!(
        "{}",
        format_summary(&summary, store.filters(), &ctx.settings.currency_symbol)
    );
    Ok(())
}

/// Handle `chart`
pub fn handle_chart_command<S: KeyValueStore>(
    store: &mut LedgerStore<S>,
    ctx: &CliContext<'_>,
    kind: ChartKind,
    filters: &FilterArgs,
) -> LedgerResult<()> {
    apply_filter_args(store, filters)?;
    let visible = store.visible();
    let symbol = &ctx.settings.currency_symbol;

    let output = match kind {
        ChartKind::Categories => {
            format_category_chart(&expenses_by_category(visible, ctx.catalog), symbol)
        }
        ChartKind::Daily => {
            format_daily_flow(&daily_flow(visible), symbol, &ctx.settings.date_format)
        }
    };
    print!("{}", output);
    Ok(())
}

/// Handle `export`
///
/// Nothing is written, and no file is created, when the view is empty.
pub fn handle_export_command<S: KeyValueStore>(
    store: &mut LedgerStore<S>,
    output: &Path,
    filters: &FilterArgs,
) -> LedgerResult<()> {
    apply_filter_args(store, filters)?;
    let visible = store.visible();

    if visible.is_empty() {
        println!("Nothing to export for {}", store.filters().month);
        return Ok(());
    }

    let file = File::create(output).map_err(|e| {
        LedgerError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    let rows = export_transactions_csv(visible, &mut writer)?;
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    println!("Exported {} transactions to {}", rows, output.display());
    Ok(())
}
