//! Core data models for the ledger
//!
//! Transactions, budget limits and the fixed-point `Money` amount they share.

pub mod budget;
pub mod money;
pub mod transaction;

pub use budget::{BudgetLimit, BudgetStatus};
pub use money::{Money, MoneyParseError};
pub use transaction::{
    parse_date, Transaction, TransactionKind, TransactionRecord, DATE_FORMAT, SUGGESTED_CATEGORIES,
};
