//! Terminal formatting for listings and reports

pub mod budget;
pub mod transaction;

pub use budget::{format_budget_check, format_budget_overview, format_savings};
pub use transaction::format_transaction_table;
