//! Error types for the ledger
//!
//! The core only ever raises two kinds of error: `Validation` for bad input
//! caught before anything is persisted, and `Storage` for a store that could
//! not complete a read or write. The remaining variants belong to the
//! configuration and export layers around the core.

use thiserror::Error;

use crate::models::MoneyParseError;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Input rejected before reaching the store
    #[error("Validation error: {0}")]
    Validation(String),

    /// The persistence store could not complete a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Shorthand for a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<MoneyParseError> for LedgerError {
    fn from(err: MoneyParseError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for LedgerError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::validation("amount must be positive");
        assert_eq!(err.to_string(), "Validation error: amount must be positive");
        assert!(err.is_validation());
        assert!(!err.is_storage());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: LedgerError = io_err.into();
        assert!(err.is_storage());
    }

    #[test]
    fn test_bad_amount_text_is_validation_error() {
        let err: LedgerError = MoneyParseError::Empty.into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Amount field is required"));
    }

    #[test]
    fn test_from_sqlite_error() {
        let err: LedgerError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, LedgerError::Storage(_)));
    }
}
