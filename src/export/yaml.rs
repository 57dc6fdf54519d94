//! YAML export for human-readable backups

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::storage::LedgerStore;

/// Export the full ledger to YAML
pub fn export_full_yaml<W: Write>(store: &dyn LedgerStore, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_store(store)?;
    let err = |e: std::io::Error| LedgerError::Export(e.to_string());

    writeln!(writer, "# Ledger export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use crate::storage::SqliteStore;
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export_is_readable_back() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .add_transaction(
                TransactionKind::Expense,
                "Food",
                Money::from_cents(1_250),
                NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            )
            .unwrap();

        let mut buffer = Vec::new();
        export_full_yaml(&store, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# Ledger export"));

        let parsed: LedgerExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.transactions.len(), 1);
        assert_eq!(parsed.transactions[0].amount.cents(), 1_250);
        assert_eq!(parsed.transactions[0].category, "Food");
    }
}
