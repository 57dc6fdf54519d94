//! Transaction model
//!
//! A `Transaction` is a validated, immutable money movement. It is the only
//! way the front end builds rows for the store, so validation happens here,
//! before anything is persisted.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Format used for transaction dates everywhere in the ledger
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Categories offered by the front end. The core accepts any non-empty label.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    "Food",
    "Rent",
    "Transport",
    "Shopping",
    "Utilities",
    "Entertainment",
    "Salary",
    "Other",
];

/// The two kinds of money movement the ledger knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    /// Name as stored in the `type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(LedgerError::validation("invalid transaction type")),
        }
    }
}

/// A validated money movement
///
/// Fields are private: once built, a transaction never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    category: String,
    amount: Money,
    date: NaiveDate,
}

impl Transaction {
    /// Create a transaction dated today
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
    ) -> LedgerResult<Self> {
        Self::on(kind, category, amount, Local::now().date_naive())
    }

    /// Create a transaction on an explicit date
    pub fn on(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> LedgerResult<Self> {
        if !amount.is_positive() {
            return Err(LedgerError::validation("amount must be positive"));
        }
        let category = validate_category(category.into())?;

        Ok(Self {
            kind,
            category,
            amount,
            date,
        })
    }

    /// Build a transaction from caller text, as typed into a form or CLI
    ///
    /// Checks run in order: kind, amount text, date text, then the value
    /// rules. The first failure is the one reported.
    pub fn parse(
        kind: &str,
        category: impl Into<String>,
        amount: &str,
        date: Option<&str>,
    ) -> LedgerResult<Self> {
        let kind: TransactionKind = kind.parse()?;
        let amount = Money::parse(amount)?;
        match date.map(parse_date).transpose()? {
            Some(date) => Self::on(kind, category, amount, date),
            None => Self::new(kind, category, amount),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date as `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Trim a category label and reject empty ones
pub(crate) fn validate_category(category: String) -> LedgerResult<String> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::validation("category must not be empty"));
    }
    if trimmed.len() == category.len() {
        Ok(category)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parse a `YYYY-MM-DD` date supplied by a caller
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| LedgerError::validation(format!("invalid date '{}', expected YYYY-MM-DD", s)))
}

/// A transaction as stored, with its store-assigned identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: i64,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    pub date: NaiveDate,
}

impl TransactionRecord {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}
