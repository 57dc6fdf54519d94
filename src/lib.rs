//! tally-ledger - personal finance ledger
//!
//! Records income and expense transactions, tracks per-category spending
//! limits and reports net savings.
//!
//! # Architecture
//!
//! - `models`: `Transaction` (validated at construction), `Money`, budget types
//! - `storage`: the `LedgerStore` contract and its JSON and SQLite backends
//! - `services`: `BudgetManager` and `SavingsManager` over a store
//! - `config`: data directory resolution and user settings
//! - `display` / `export`: listings, reports and CSV/JSON/YAML export
//! - `cli`: command handlers used by the `tally` binary
//!
//! # Example
//!
//! ```rust
//! use tally_ledger::models::{Money, Transaction, TransactionKind};
//! use tally_ledger::services::{BudgetManager, SavingsManager};
//! use tally_ledger::storage::{LedgerStore, SqliteStore};
//!
//! let store = SqliteStore::open_in_memory()?;
//! store.record(&Transaction::new(TransactionKind::Income, "Salary", Money::from_units(5000))?)?;
//! store.record(&Transaction::new(TransactionKind::Expense, "Food", Money::from_units(1500))?)?;
//!
//! let budgets = BudgetManager::new(&store);
//! budgets.set_budget("Food", Money::from_units(1000))?;
//! assert!(budgets.is_over_budget("Food")?);
//!
//! let savings = SavingsManager::new(&store).calculate_savings()?;
//! assert_eq!(savings, Money::from_units(3500));
//! # Ok::<(), tally_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
