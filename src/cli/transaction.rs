//! Transaction CLI commands
//!
//! `add` builds a validated `Transaction` and hands it to the store; `list`
//! prints the ledger.

use crate::config::Settings;
use crate::display::format_transaction_table;
use crate::error::LedgerResult;
use crate::models::{Transaction, SUGGESTED_CATEGORIES};
use crate::storage::LedgerStore;

/// Record a new transaction
pub fn handle_add_command(
    store: &dyn LedgerStore,
    settings: &Settings,
    kind: &str,
    category: &str,
    amount: &str,
    date: Option<&str>,
) -> LedgerResult<()> {
    let transaction = Transaction::parse(kind, category, amount, date)?;
    store.record(&transaction)?;

    println!(
        "Transaction added: {} {} {} on {}",
        transaction.kind(),
        transaction.category(),
        transaction.amount().format_with_symbol(&settings.currency_symbol),
        transaction.date_string()
    );
    Ok(())
}

/// List recorded transactions, optionally only the most recent `limit`
pub fn handle_list_command(
    store: &dyn LedgerStore,
    settings: &Settings,
    limit: Option<usize>,
) -> LedgerResult<()> {
    let transactions = store.fetch_transactions()?;
    let skip = limit.map_or(0, |n| transactions.len().saturating_sub(n));

    print!(
        "{}",
        format_transaction_table(
            &transactions[skip..],
            &settings.currency_symbol,
            &settings.date_format
        )
    );
    Ok(())
}

/// Print the suggested category names
pub fn handle_categories_command() {
    for category in SUGGESTED_CATEGORIES {
        println!("{}", category);
    }
}
