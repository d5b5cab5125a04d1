//! Transaction CLI commands
//!
//! Add, edit, delete, show and list transactions, plus ledger resets.

use clap::Args;

use super::{
    apply_filter_args, check_description, parse_amount, parse_category, parse_date_or_today,
    CliContext, FilterArgs, KindArg,
};
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::month::parse_iso_date;
use crate::models::{TransactionId, TransactionInput, TransactionPatch};
use crate::services::LedgerStore;
use crate::storage::KeyValueStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// income or expense
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Amount greater than 0 (e.g. "12.50")
    #[arg(allow_negative_numbers = true)]
    pub amount: String,

    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Category id (e.g. cat_food)
    #[arg(short, long)]
    pub category: String,

    /// Free-text description
    #[arg(short = 'D', long)]
    pub description: Option<String>,
}

/// Arguments for `edit`
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Transaction ID
    pub id: String,

    /// New type
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: Option<KindArg>,

    /// New amount
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// New category id
    #[arg(short, long)]
    pub category: Option<String>,

    /// New description; an empty value clears it
    #[arg(short = 'D', long)]
    pub description: Option<String>,
}

impl EditArgs {
    fn to_patch(&self) -> LedgerResult<TransactionPatch> {
        let mut patch = TransactionPatch::new();
        if let Some(kind) = self.kind {
            patch = patch.kind(kind.into());
        }
        if let Some(amount) = &self.amount {
            patch = patch.amount(parse_amount(amount)?);
        }
        if let Some(date) = &self.date {
            patch = patch.date(parse_iso_date(date)?);
        }
        if let Some(category) = &self.category {
            patch = patch.category(parse_category(category)?);
        }
        if let Some(description) = &self.description {
            check_description(description)?;
            patch = patch.description(description.as_str());
        }
        Ok(patch)
    }
}

/// Handle `add`
pub fn handle_add_command<S: KeyValueStore>(
    store: &mut LedgerStore<S>,
    ctx: &CliContext<'_>,
    args: AddArgs,
) -> LedgerResult<()> {
    let amount = parse_amount(&args.amount)?;
    let date = parse_date_or_today(args.date.as_deref())?;
    let category = parse_category(&args.category)?;

    let mut input = TransactionInput::new(args.kind.into(), amount, date, category);
    if let Some(description) = args.description {
        check_description(&description)?;
        input = input.with_description(description);
    }

    let txn = store.create(input);

    println!("Created transaction:");
    print!(
        "{}",
        format_transaction_details(
            &txn,
            ctx.catalog,
            &ctx.settings.currency_symbol,
            &ctx.settings.date_format
        )
    );
    if !ctx.catalog.contains(&txn.category_id) {
        println!("Note: '{}' is not a known category", txn.category_id);
    }
    Ok(())
}

/// Handle `edit`
pub fn handle_edit_command<S: KeyValueStore>(
    store: &mut LedgerStore<S>,
    ctx: &CliContext<'_>,
    args: EditArgs,
) -> LedgerResult<()> {
    let patch = args.to_patch()?;
    if patch.is_empty() {
        return Err(LedgerError::Validation(
            "Nothing to change. Pass at least one of --type, --amount, --date, --category, --description".into(),
        ));
    }

    let id = TransactionId::from(args.id.as_str());
    if !store.update(&id, patch) {
        return Err(LedgerError::transaction_not_found(args.id));
    }

    let txn = store
        .get(&id)
        .ok_or_else(|| LedgerError::transaction_not_found(id.as_str()))?;
    println!("Updated transaction:");
    print!(
        "{}",
        format_transaction_details(
            txn,
            ctx.catalog,
            &ctx.settings.currency_symbol,
            &ctx.settings.date_format
        )
    );
    Ok(())
}

/// Handle `delete`
pub fn handle_delete_command<S: KeyValueStore>(
    store: &mut LedgerStore<S>,
    id: &str,
) -> LedgerResult<()> {
    if !store.delete(&TransactionId::from(id)) {
        return Err(LedgerError::transaction_not_found(id));
    }
    println!("Deleted transaction {}", id);
    Ok(())
}

/// Handle `show`
pub fn handle_show_command<S: KeyValueStore>(
    store: &LedgerStore<S>,
    ctx: &CliContext<'_>,
    id: &str,
) -> LedgerResult<()> {
    let txn = store
        .get(&TransactionId::from(id))
        .ok_or_else(|| LedgerError::transaction_not_found(id))?;
    print!(
        "{}",
        format_transaction_details(
            txn,
            ctx.catalog,
            &ctx.settings.currency_symbol,
            &ctx.settings.date_format
        )
    );
    Ok(())
}

/// Handle `list`
pub fn handle_list_command<S: KeyValueStore>(
    store: &mut LedgerStore<S>,
    ctx: &CliContext<'_>,
    filters: &FilterArgs,
) -> LedgerResult<()> {
    apply_filter_args(store, filters)?;
    let visible = store.visible();

    print!(
        "{}",
        format_transaction_table(
            &visible,
            ctx.catalog,
            &ctx.settings.currency_symbol,
            &ctx.settings.date_format
        )
    );
    println!(
        "\nShowing {} of {} transactions ({})",
        visible.len(),
        store.len(),
        store.filters().month
    );
    Ok(())
}

/// Handle `reset`
pub fn handle_reset_command<S: KeyValueStore>(
    store: &mut LedgerStore<S>,
    demo: bool,
) -> LedgerResult<()> {
    if demo {
        store.reset_to_demo();
        println!("Ledger reset to demo data ({} transactions)", store.len());
    } else {
        store.reset_all();
        println!("All transactions removed");
    }
    Ok(())
}
