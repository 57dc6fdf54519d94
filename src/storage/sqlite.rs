//! SQLite backend
//!
//! Amounts are stored as integer cents. Each public operation is a single SQL
//! statement, so SQLite's per-statement atomicity is all the isolation the
//! store needs.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use super::LedgerStore;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetLimit, Money, TransactionKind, TransactionRecord, DATE_FORMAT};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS transactions (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        type     TEXT NOT NULL CHECK (type IN ('Income', 'Expense')),
        category TEXT NOT NULL,
        amount   INTEGER NOT NULL CHECK (amount > 0),
        date     TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS budgets (
        category     TEXT PRIMARY KEY,
        limit_amount INTEGER NOT NULL CHECK (limit_amount > 0)
    );

    CREATE INDEX IF NOT EXISTS idx_transactions_type_category
        ON transactions(type, category);
";

/// Ledger store backed by a SQLite database
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a database file and provision the tables
    pub fn open(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        Self::with_connection(conn)
    }

    /// A private in-memory database, gone when the store is dropped
    pub fn open_in_memory() -> LedgerResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> LedgerResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> LedgerResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire connection lock: {}", e)))
    }

    fn sum(&self, sql: &str, params: impl rusqlite::Params) -> LedgerResult<Money> {
        let conn = self.conn()?;
        let cents: i64 = conn.query_row(sql, params, |row| row.get(0))?;
        Ok(Money::from_cents(cents))
    }
}

fn record_from_columns(
    id: i64,
    kind: &str,
    category: String,
    amount: i64,
    date: &str,
) -> LedgerResult<TransactionRecord> {
    let kind = kind.parse::<TransactionKind>().map_err(|_| {
        LedgerError::Storage(format!("Row {} has unknown transaction type '{}'", id, kind))
    })?;
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| {
        LedgerError::Storage(format!("Row {} has unreadable date '{}': {}", id, date, e))
    })?;

    Ok(TransactionRecord {
        id,
        kind,
        category,
        amount: Money::from_cents(amount),
        date,
    })
}

impl LedgerStore for SqliteStore {
    fn add_transaction(
        &self,
        kind: TransactionKind,
        category: &str,
        amount: Money,
        date: NaiveDate,
    ) -> LedgerResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO transactions (type, category, amount, date) VALUES (?1, ?2, ?3, ?4)",
            params![
                kind.as_str(),
                category,
                amount.cents(),
                date.format(DATE_FORMAT).to_string()
            ],
        )?;

        tracing::debug!(id = conn.last_insert_rowid(), %kind, category, %amount, "transaction appended");
        Ok(())
    }

    fn fetch_transactions(&self) -> LedgerResult<Vec<TransactionRecord>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, type, category, amount, date FROM transactions ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, kind, category, amount, date) = row?;
            records.push(record_from_columns(id, &kind, category, amount, &date)?);
        }
        Ok(records)
    }

    fn set_budget(&self, category: &str, limit_amount: Money) -> LedgerResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO budgets (category, limit_amount) VALUES (?1, ?2)
             ON CONFLICT(category) DO UPDATE SET limit_amount = excluded.limit_amount",
            params![category, limit_amount.cents()],
        )?;

        tracing::debug!(category, %limit_amount, "budget set");
        Ok(())
    }

    fn get_budget(&self, category: &str) -> LedgerResult<Option<Money>> {
        let conn = self.conn()?;
        let cents: Option<i64> = conn
            .query_row(
                "SELECT limit_amount FROM budgets WHERE category = ?1",
                params![category],
                |row| row.get(0),
            )
            .optional()?;
        Ok(cents.map(Money::from_cents))
    }

    fn list_budgets(&self) -> LedgerResult<Vec<BudgetLimit>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT category, limit_amount FROM budgets ORDER BY category")?;
        let budgets = stmt
            .query_map([], |row| {
                Ok(BudgetLimit::new(
                    row.get::<_, String>(0)?,
                    Money::from_cents(row.get(1)?),
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(budgets)
    }

    fn get_total_by_type(&self, kind: TransactionKind) -> LedgerResult<Money> {
        self.sum(
            "SELECT COALESCE(SUM(amount), 0) FROM transactions WHERE type = ?1",
            params![kind.as_str()],
        )
    }

    fn get_category_expense(&self, category: &str) -> LedgerResult<Money> {
        self.sum(
            "SELECT COALESCE(SUM(amount), 0) FROM transactions
             WHERE type = 'Expense' AND category = ?1",
            params![category],
        )
    }

    fn close(self: Box<Self>) -> LedgerResult<()> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|e| LedgerError::Storage(format!("Connection lock poisoned: {}", e)))?;
        conn.close().map_err(|(_, e)| LedgerError::from(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::contract::{self, d};
    use tempfile::TempDir;

    #[test]
    fn test_empty_store_reads() {
        contract::empty_store_reads(&SqliteStore::open_in_memory().unwrap());
    }

    #[test]
    fn test_round_trip_in_insertion_order() {
        contract::round_trip_in_insertion_order(&SqliteStore::open_in_memory().unwrap());
    }

    #[test]
    fn test_record_validated_transaction() {
        contract::record_validated_transaction(&SqliteStore::open_in_memory().unwrap());
    }

    #[test]
    fn test_aggregates() {
        contract::aggregates(&SqliteStore::open_in_memory().unwrap());
    }

    #[test]
    fn test_budget_upsert_replaces() {
        contract::budget_upsert_replaces(&SqliteStore::open_in_memory().unwrap());
    }

    #[test]
    fn test_returned_rows_are_snapshots() {
        contract::returned_rows_are_snapshots(&SqliteStore::open_in_memory().unwrap());
    }

    #[test]
    fn test_aggregate_overflow_is_storage_error() {
        contract::aggregate_overflow_is_storage_error(&SqliteStore::open_in_memory().unwrap());
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.db");

        let store = SqliteStore::open(&path).unwrap();
        store
            .add_transaction(TransactionKind::Expense, "Food", Money::from_units(200), d(2025, 1, 1))
            .unwrap();
        store.set_budget("Food", Money::from_units(150)).unwrap();
        Box::new(store).close().unwrap();

        let store = SqliteStore::open(&path).unwrap();
        let rows = store.fetch_transactions().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, d(2025, 1, 1));
        assert_eq!(store.get_budget("Food").unwrap(), Some(Money::from_units(150)));
    }

    #[test]
    fn test_constraint_violation_adds_no_row() {
        let store = SqliteStore::open_in_memory().unwrap();
        let err = store
            .add_transaction(TransactionKind::Expense, "Food", Money::zero(), d(2025, 1, 1))
            .unwrap_err();

        assert!(err.is_storage());
        assert!(store.fetch_transactions().unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_row_is_storage_error() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .conn()
            .unwrap()
            .execute(
                "INSERT INTO transactions (type, category, amount, date) VALUES ('Expense', 'Food', 100, 'yesterday')",
                [],
            )
            .unwrap();

        let err = store.fetch_transactions().unwrap_err();
        assert!(err.to_string().contains("unreadable date"));
    }
}
