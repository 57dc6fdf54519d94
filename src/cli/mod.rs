//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main.rs` with the ledger core.

pub mod budget;
pub mod export;
pub mod savings;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportFormat};
pub use savings::handle_savings_command;
pub use transaction::{handle_add_command, handle_categories_command, handle_list_command};
