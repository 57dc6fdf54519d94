//! Savings manager

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, TransactionKind};
use crate::storage::LedgerStore;

/// Computes net savings from the store's income and expense totals
pub struct SavingsManager<'a> {
    store: &'a dyn LedgerStore,
}

/// Income, expense and their difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavingsSummary {
    pub income: Money,
    pub expense: Money,
    pub savings: Money,
}

impl<'a> SavingsManager<'a> {
    pub fn new(store: &'a dyn LedgerStore) -> Self {
        Self { store }
    }

    /// Total income minus total expense. Negative when spending exceeds income.
    pub fn calculate_savings(&self) -> LedgerResult<Money> {
        Ok(self.summary()?.savings)
    }

    pub fn summary(&self) -> LedgerResult<SavingsSummary> {
        let income = self.store.get_total_by_type(TransactionKind::Income)?;
        let expense = self.store.get_total_by_type(TransactionKind::Expense)?;

        let savings = income
            .checked_sub(expense)
            .ok_or_else(|| LedgerError::Storage("integer overflow".into()))?;

        Ok(SavingsSummary {
            income,
            expense,
            savings,
        })
    }
}
