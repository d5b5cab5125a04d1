use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use moneyio::cli::{
    handle_add_command, handle_chart_command, handle_delete_command, handle_edit_command,
    handle_export_command, handle_list_command, handle_reset_command, handle_show_command,
    handle_summary_command, AddArgs, ChartKind, CliContext, EditArgs, FilterArgs,
};
use moneyio::config::{MoneyioPaths, Settings};
use moneyio::logging::init_tracing;
use moneyio::models::CategoryCatalog;
use moneyio::services::LedgerStore;
use moneyio::storage::{initialize_storage, open_file_store};

#[derive(Parser)]
#[command(
    name = "moneyio",
    version,
    about = "Personal income and expense ledger",
    long_about = "moneyio records income and expenses, shows a monthly view with \
                  totals and charts, and keeps everything in a local JSON file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new transaction
    Add(AddArgs),

    /// Change fields of a transaction
    Edit(EditArgs),

    /// Delete a transaction
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: String,
    },

    /// Show one transaction
    Show {
        /// Transaction ID
        id: String,
    },

    /// List transactions in the current view
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Income, expense and balance of the current view
    Summary(FilterArgs),

    /// Chart the current view
    Chart {
        #[arg(value_enum)]
        chart: ChartKind,
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Export the current view to CSV
    Export {
        /// Output file path
        output: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Remove every transaction
    Reset {
        /// Restore the demo dataset instead of emptying the ledger
        #[arg(long)]
        demo: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = MoneyioPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    initialize_storage(&paths)?;
    let backend = open_file_store(&paths)?;
    let mut store = LedgerStore::from_settings(backend, &settings);
    let outcome = store.hydrate();
    debug!(?outcome, "ledger hydrated");

    let catalog = CategoryCatalog::default();
    let ctx = CliContext {
        settings: &settings,
        catalog: &catalog,
    };

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&mut store, &ctx, args)?,
        Some(Commands::Edit(args)) => handle_edit_command(&mut store, &ctx, args)?,
        Some(Commands::Delete { id }) => handle_delete_command(&mut store, &id)?,
        Some(Commands::Show { id }) => handle_show_command(&store, &ctx, &id)?,
        Some(Commands::List(filters)) => handle_list_command(&mut store, &ctx, &filters)?,
        Some(Commands::Summary(filters)) => handle_summary_command(&mut store, &ctx, &filters)?,
        Some(Commands::Chart { chart, filters }) => {
            handle_chart_command(&mut store, &ctx, chart, &filters)?
        }
        Some(Commands::Export { output, filters }) => {
            handle_export_command(&mut store, &output, &filters)?
        }
        Some(Commands::Reset { demo }) => handle_reset_command(&mut store, demo)?,
        Some(Commands::Config { save }) => {
            if save {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
                println!();
            }
            println!("moneyio Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Storage key:       {}", settings.storage_key);
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Reseed when empty: {}", settings.reseed_when_empty);
            println!("  Log filter:        {}", settings.log_filter);
            println!();
            println!("Transactions stored: {}", store.len());
        }
        None => {
            println!("moneyio - personal income and expense ledger");
            println!();
            println!("Run 'moneyio --help' for usage information.");
            println!("Run 'moneyio list' to see this month's transactions.");
        }
    }

    Ok(())
}
