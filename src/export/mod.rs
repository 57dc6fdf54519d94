//! Export module
//!
//! - CSV: the transaction relation, spreadsheet-compatible
//! - JSON: machine-readable full ledger export
//! - YAML: human-readable full ledger export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_full_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;
