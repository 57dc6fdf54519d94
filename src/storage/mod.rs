//! Persistence layer for the ledger
//!
//! `LedgerStore` is the whole contract the domain managers rely on: an
//! append-only transaction relation, a budget relation keyed by category, and
//! two aggregate queries. Nothing is cached above the store; every aggregate is
//! re-derived from stored rows on each call.
//!
//! Two backends implement it:
//!
//! - [`JsonStore`]: one JSON file per relation, replaced atomically on write
//! - [`SqliteStore`]: a single SQLite database

pub mod file_io;
pub mod json;
pub mod sqlite;

pub use json::JsonStore;
pub use sqlite::SqliteStore;

use chrono::NaiveDate;

use crate::config::{LedgerPaths, StorageBackend};
use crate::error::LedgerResult;
use crate::models::{BudgetLimit, Money, Transaction, TransactionKind, TransactionRecord};

/// Durable storage for transactions and budget limits
///
/// Every method is its own atomic unit. A failed write leaves the store as it
/// was before the call.
pub trait LedgerStore: Send + Sync {
    /// Append a transaction row; the store assigns its identity
    fn add_transaction(
        &self,
        kind: TransactionKind,
        category: &str,
        amount: Money,
        date: NaiveDate,
    ) -> LedgerResult<()>;

    /// All transaction rows in insertion order
    fn fetch_transactions(&self) -> LedgerResult<Vec<TransactionRecord>>;

    /// Insert or replace the limit for a category
    fn set_budget(&self, category: &str, limit_amount: Money) -> LedgerResult<()>;

    /// The limit for a category, if one was ever set
    fn get_budget(&self, category: &str) -> LedgerResult<Option<Money>>;

    /// Every configured limit, ordered by category
    fn list_budgets(&self) -> LedgerResult<Vec<BudgetLimit>>;

    /// Sum of all amounts of one kind; zero when there are none
    fn get_total_by_type(&self, kind: TransactionKind) -> LedgerResult<Money>;

    /// Sum of expense amounts in a category; zero when there are none
    fn get_category_expense(&self, category: &str) -> LedgerResult<Money>;

    /// Append a validated transaction
    fn record(&self, transaction: &Transaction) -> LedgerResult<()> {
        self.add_transaction(
            transaction.kind(),
            transaction.category(),
            transaction.amount(),
            transaction.date(),
        )
    }

    /// Release the underlying handle
    fn close(self: Box<Self>) -> LedgerResult<()> {
        Ok(())
    }
}

/// Open the configured backend under the given paths
///
/// Files and tables are created on first open.
pub fn open_store(
    backend: StorageBackend,
    paths: &LedgerPaths,
) -> LedgerResult<Box<dyn LedgerStore>> {
    paths.ensure_directories()?;

    let store: Box<dyn LedgerStore> = match backend {
        StorageBackend::Json => Box::new(JsonStore::open(
            paths.transactions_file(),
            paths.budgets_file(),
        )?),
        StorageBackend::Sqlite => Box::new(SqliteStore::open(paths.database_file())?),
    };

    tracing::info!(?backend, base_dir = %paths.base_dir().display(), "ledger store opened");
    Ok(store)
}
