//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::LedgerStore;

/// Output format for `export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Transactions only, spreadsheet-compatible
    Csv,
    /// Transactions and budgets
    Json,
    /// Transactions and budgets, human-readable
    Yaml,
}

/// Export the ledger to a file, or stdout when no path is given
pub fn handle_export_command(
    store: &dyn LedgerStore,
    format: ExportFormat,
    output: Option<&Path>,
) -> LedgerResult<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ExportFormat::Csv => export_transactions_csv(store, &mut writer)?,
        ExportFormat::Json => export_full_json(store, &mut writer)?,
        ExportFormat::Yaml => export_full_yaml(store, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    if let Some(path) = output {
        eprintln!("Exported to {}", path.display());
    }
    Ok(())
}
