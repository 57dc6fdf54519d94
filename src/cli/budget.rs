//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_check, format_budget_overview};
use crate::error::LedgerResult;
use crate::models::Money;
use crate::services::BudgetManager;
use crate::storage::LedgerStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the spending limit for a category (replaces any previous limit)
    Set {
        /// Category name
        category: String,
        /// Limit (e.g., "1000" or "1000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Check whether a category is over its limit
    Check {
        /// Category name
        category: String,
    },

    /// Show every limit with spending so far
    Status,
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &dyn LedgerStore,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let manager = BudgetManager::new(store);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let amount = Money::parse(&amount)?;
            manager.set_budget(&category, amount)?;
            println!(
                "Budget for '{}' set to {}",
                category.trim(),
                amount.format_with_symbol(symbol)
            );
        }
        BudgetCommands::Check { category } => {
            let status = manager.status(&category)?;
            println!("{}", format_budget_check(&category, status.as_ref(), symbol));
        }
        BudgetCommands::Status => {
            print!("{}", format_budget_overview(&manager.overview()?, symbol));
        }
    }

    Ok(())
}
