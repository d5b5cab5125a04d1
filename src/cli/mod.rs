//! CLI command handlers
//!
//! This module bridges clap argument parsing with the ledger store. Input
//! validation for hand-typed values (amounts, dates, descriptions) happens
//! here; the store itself accepts anything and normalizes.

pub mod report;
pub mod transaction;

pub use report::{
    handle_chart_command, handle_export_command, handle_summary_command, ChartKind,
};
pub use transaction::{
    handle_add_command, handle_delete_command, handle_edit_command, handle_list_command,
    handle_reset_command, handle_show_command, AddArgs, EditArgs,
};

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::month::{parse_iso_date, today};
use crate::models::{
    normalize, CategoryCatalog, CategoryFilter, FiltersPatch, MonthKey, TransactionType,
    TypeFilter,
};
use crate::services::LedgerStore;
use crate::storage::KeyValueStore;

/// Longest description accepted from the command line
pub const MAX_DESCRIPTION_LEN: usize = 80;

/// What a handler needs besides the store
pub struct CliContext<'a> {
    pub settings: &'a Settings,
    pub catalog: &'a CategoryCatalog,
}

/// Transaction direction as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionType::Income,
            KindArg::Expense => TransactionType::Expense,
        }
    }
}

/// Arguments narrowing the ledger view
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Month to show (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Case-insensitive text to look for in descriptions
    #[arg(short, long)]
    pub search: Option<String>,

    /// income, expense or all
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Category id, or all
    #[arg(short, long)]
    pub category: Option<String>,
}

impl FilterArgs {
    /// Parse into a filters patch; unset arguments leave filters untouched
    pub fn to_patch(&self) -> LedgerResult<FiltersPatch> {
        Ok(FiltersPatch {
            month: self.month.as_deref().map(MonthKey::parse).transpose()?,
            search: self.search.clone(),
            kind: self
                .kind
                .as_deref()
                .map(str::parse::<TypeFilter>)
                .transpose()?,
            category: self.category.as_deref().map(CategoryFilter::from),
        })
    }
}

/// Apply command-line filters to the store's view
pub fn apply_filter_args<S: KeyValueStore>(
    store: &mut LedgerStore<S>,
    args: &FilterArgs,
) -> LedgerResult<()> {
    store.set_filters(args.to_patch()?);
    Ok(())
}

/// Parse a positive amount such as `12.50`, `1234` or `1.234,56`
pub fn parse_amount(input: &str) -> LedgerResult<f64> {
    let trimmed = input.trim();
    let invalid = || {
        LedgerError::Validation(format!(
            "Invalid amount: '{}'. Use a number greater than 0 like '12.50'",
            input
        ))
    };

    // With a comma, `.` may only group thousands before the decimal comma
    let canonical = match trimmed.rfind(',') {
        Some(comma) => {
            if trimmed.matches(',').count() > 1 || trimmed[comma..].contains('.') {
                return Err(invalid());
            }
            trimmed.replace('.', "").replace(',', ".")
        }
        None => trimmed.to_string(),
    };

    let value: f64 = canonical.parse().map_err(|_| invalid())?;
    if !value.is_finite() || normalize(value) <= 0.0 {
        return Err(invalid());
    }
    Ok(value)
}

/// Parse an optional ISO date, defaulting to today
pub fn parse_date_or_today(input: Option<&str>) -> LedgerResult<chrono::NaiveDate> {
    match input {
        Some(s) => parse_iso_date(s),
        None => Ok(today()),
    }
}

/// Reject blank category ids
pub fn parse_category(input: &str) -> LedgerResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::Validation("Category must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

/// Enforce the description length limit
pub fn check_description(input: &str) -> LedgerResult<()> {
    let len = input.trim().chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(LedgerError::Validation(format!(
            "Description is {} characters long; the limit is {}",
            len, MAX_DESCRIPTION_LEN
        )));
    }
    Ok(())
}
