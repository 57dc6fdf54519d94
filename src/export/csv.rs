//! CSV export of the transaction relation

use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::storage::LedgerStore;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

/// Export all transactions to CSV, one row per transaction in insertion order
pub fn export_transactions_csv<W: Write>(store: &dyn LedgerStore, writer: W) -> LedgerResult<()> {
    let transactions = store.fetch_transactions()?;
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        csv_writer
            .write_record(["ID", "Date", "Type", "Category", "Amount"])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    for txn in &transactions {
        csv_writer
            .serialize(CsvRow {
                id: txn.id,
                date: txn.date.format(crate::models::DATE_FORMAT).to_string(),
                kind: txn.kind.as_str(),
                category: &txn.category,
                amount: txn.amount.to_string(),
            })
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use crate::storage::SqliteStore;
    use chrono::NaiveDate;

    #[test]
    fn test_csv_export() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .add_transaction(
                TransactionKind::Expense,
                "Eating, out",
                Money::from_cents(1_250),
                NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            )
            .unwrap();

        let mut buffer = Vec::new();
        export_transactions_csv(&store, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ID,Date,Type,Category,Amount"));
        assert_eq!(lines.next(), Some("1,2025-01-03,Expense,\"Eating, out\",12.50"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_csv_has_header() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut buffer = Vec::new();
        export_transactions_csv(&store, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "ID,Date,Type,Category,Amount\n");
    }
}
