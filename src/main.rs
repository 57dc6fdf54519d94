use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tally_ledger::cli::{
    handle_add_command, handle_budget_command, handle_categories_command, handle_export_command,
    handle_list_command, handle_savings_command, BudgetCommands, ExportFormat,
};
use tally_ledger::config::paths::DATA_DIR_ENV;
use tally_ledger::config::{LedgerPaths, Settings, StorageBackend};
use tally_ledger::logging::init_tracing;
use tally_ledger::storage::{open_store, LedgerStore};
use tally_ledger::LedgerResult;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Personal finance ledger with category budgets and savings tracking"
)]
struct Cli {
    /// Directory holding config.json and the ledger data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Storage backend for this run (defaults to the saved setting)
    #[arg(long, global = true, value_enum)]
    backend: Option<StorageBackend>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an income or expense
    Add {
        /// "income" or "expense"
        kind: String,
        /// Category name (see `tally categories` for suggestions)
        category: String,
        /// Amount (e.g., "1200" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List recorded transactions
    #[command(alias = "ls")]
    List {
        /// Only show the most recent N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show total income, expenses and savings
    Savings,

    /// List suggested category names
    Categories,

    /// Export the ledger
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };

    let mut settings = Settings::load_or_create(&paths)?;
    if !paths.is_initialized() {
        settings.save(&paths)?;
    }
    if let Some(backend) = cli.backend {
        settings.backend = backend;
    }

    let Some(command) = cli.command else {
        println!("tally - personal finance ledger");
        println!();
        println!("Run 'tally --help' for usage information.");
        return Ok(());
    };

    let store = open_store(settings.backend, &paths)?;
    let result = run(&*store, &paths, &settings, command);
    finish(result, store.close())
}

/// The command's own error wins; a close failure only surfaces on success
fn finish(result: Result<()>, closed: LedgerResult<()>) -> Result<()> {
    if let Err(e) = &closed {
        tracing::warn!(error = %e, "failed to close ledger store");
    }
    result?;
    closed?;
    Ok(())
}

fn run(
    store: &dyn LedgerStore,
    paths: &LedgerPaths,
    settings: &Settings,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Add {
            kind,
            category,
            amount,
            date,
        } => handle_add_command(store, settings, &kind, &category, &amount, date.as_deref())?,
        Commands::List { limit } => handle_list_command(store, settings, limit)?,
        Commands::Budget(cmd) => handle_budget_command(store, settings, cmd)?,
        Commands::Savings => handle_savings_command(store, settings)?,
        Commands::Categories => handle_categories_command(),
        Commands::Export { format, output } => {
            handle_export_command(store, format, output.as_deref())?
        }
        Commands::Config => print_config(paths, settings),
    }
    Ok(())
}

fn print_config(paths: &LedgerPaths, settings: &Settings) {
    println!("Ledger Configuration");
    println!("====================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data directory: {}", paths.data_dir().display());
    println!();
    println!("Settings:");
    println!("  Backend:         {:?}", settings.backend);
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
}
