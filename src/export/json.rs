//! JSON export
//!
//! Dumps the whole ledger (transactions and budget limits) with a schema
//! version so older exports can be recognised.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetLimit, TransactionRecord};
use crate::storage::LedgerStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Version of the application that wrote the export
    pub app_version: String,
    pub transactions: Vec<TransactionRecord>,
    pub budgets: Vec<BudgetLimit>,
}

impl LedgerExport {
    /// Snapshot the store
    pub fn from_store(store: &dyn LedgerStore) -> LedgerResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: store.fetch_transactions()?,
            budgets: store.list_budgets()?,
        })
    }
}

/// Export the full ledger as pretty-printed JSON
pub fn export_full_json<W: Write>(store: &dyn LedgerStore, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_store(store)?;
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use crate::storage::SqliteStore;
    use chrono::NaiveDate;

    #[test]
    fn test_json_export_round_trips() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .add_transaction(
                TransactionKind::Income,
                "Salary",
                Money::from_units(5000),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            )
            .unwrap();
        store.set_budget("Food", Money::from_units(1000)).unwrap();

        let mut buffer = Vec::new();
        export_full_json(&store, &mut buffer).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.transactions, store.fetch_transactions().unwrap());
        assert_eq!(parsed.budgets.len(), 1);
    }
}
