//! JSON file backend
//!
//! Keeps each relation in memory and rewrites its file atomically on every
//! mutation. Memory is only left changed once the file write has succeeded, so
//! a failed call leaves both disk and memory as they were.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::file_io::{load_json, replace_json};
use super::LedgerStore;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetLimit, Money, TransactionKind, TransactionRecord};

/// Appended to a relation's file name while its new version is written
const STAGING_SUFFIX: &str = ".tmp";

/// Serializable contents of transactions.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    /// Highest identity ever handed out
    #[serde(default)]
    last_id: i64,
    #[serde(default)]
    transactions: Vec<TransactionRecord>,
}

/// Serializable contents of budgets.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<BudgetLimit>,
}

/// Ledger store backed by two JSON files
pub struct JsonStore {
    transactions_path: PathBuf,
    budgets_path: PathBuf,
    ledger: RwLock<TransactionData>,
    budgets: RwLock<BTreeMap<String, Money>>,
}

impl JsonStore {
    /// Open the store, loading whatever the files already hold
    ///
    /// Missing files are treated as empty relations and created on first write.
    pub fn open(transactions_path: PathBuf, budgets_path: PathBuf) -> LedgerResult<Self> {
        let mut ledger: TransactionData = load_json(&transactions_path)?;
        let max_id = ledger.transactions.iter().map(|t| t.id).max().unwrap_or(0);
        ledger.last_id = ledger.last_id.max(max_id);

        let budget_data: BudgetData = load_json(&budgets_path)?;
        let budgets = budget_data
            .budgets
            .into_iter()
            .map(|b| (b.category, b.limit_amount))
            .collect();

        tracing::debug!(
            rows = ledger.transactions.len(),
            path = %transactions_path.display(),
            "loaded transactions"
        );

        Ok(Self {
            transactions_path,
            budgets_path,
            ledger: RwLock::new(ledger),
            budgets: RwLock::new(budgets),
        })
    }

    fn read_ledger(&self) -> LedgerResult<RwLockReadGuard<'_, TransactionData>> {
        self.ledger
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_ledger(&self) -> LedgerResult<RwLockWriteGuard<'_, TransactionData>> {
        self.ledger
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    fn read_budgets(&self) -> LedgerResult<RwLockReadGuard<'_, BTreeMap<String, Money>>> {
        self.budgets
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_budgets(&self) -> LedgerResult<RwLockWriteGuard<'_, BTreeMap<String, Money>>> {
        self.budgets
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    fn sum_where<F>(&self, predicate: F) -> LedgerResult<Money>
    where
        F: Fn(&TransactionRecord) -> bool,
    {
        let ledger = self.read_ledger()?;
        ledger
            .transactions
            .iter()
            .filter(|t| predicate(*t))
            .try_fold(Money::zero(), |total, t| total.checked_add(t.amount))
            .ok_or_else(|| LedgerError::Storage("integer overflow".into()))
    }
}

fn budget_file_data(budgets: &BTreeMap<String, Money>) -> BudgetData {
    BudgetData {
        budgets: budgets
            .iter()
            .map(|(category, limit)| BudgetLimit::new(category.clone(), *limit))
            .collect(),
    }
}

impl LedgerStore for JsonStore {
    fn add_transaction(
        &self,
        kind: TransactionKind,
        category: &str,
        amount: Money,
        date: NaiveDate,
    ) -> LedgerResult<()> {
        let mut ledger = self.write_ledger()?;

        let id = ledger.last_id + 1;
        ledger.transactions.push(TransactionRecord {
            id,
            kind,
            category: category.to_string(),
            amount,
            date,
        });
        ledger.last_id = id;

        if let Err(e) = replace_json(&self.transactions_path, STAGING_SUFFIX, &*ledger) {
            ledger.transactions.pop();
            ledger.last_id = id - 1;
            return Err(e);
        }

        tracing::debug!(id, %kind, category, %amount, "transaction appended");
        Ok(())
    }

    fn fetch_transactions(&self) -> LedgerResult<Vec<TransactionRecord>> {
        Ok(self.read_ledger()?.transactions.clone())
    }

    fn set_budget(&self, category: &str, limit_amount: Money) -> LedgerResult<()> {
        let mut budgets = self.write_budgets()?;

        let previous = budgets.insert(category.to_string(), limit_amount);
        if let Err(e) = replace_json(&self.budgets_path, STAGING_SUFFIX, &budget_file_data(&budgets)) {
            match previous {
                Some(limit) => budgets.insert(category.to_string(), limit),
                None => budgets.remove(category),
            };
            return Err(e);
        }

        tracing::debug!(category, %limit_amount, replaced = previous.is_some(), "budget set");
        Ok(())
    }

    fn get_budget(&self, category: &str) -> LedgerResult<Option<Money>> {
        Ok(self.read_budgets()?.get(category).copied())
    }

    fn list_budgets(&self) -> LedgerResult<Vec<BudgetLimit>> {
        Ok(budget_file_data(&*self.read_budgets()?).budgets)
    }

    fn get_total_by_type(&self, kind: TransactionKind) -> LedgerResult<Money> {
        self.sum_where(|t| t.kind == kind)
    }

    fn get_category_expense(&self, category: &str) -> LedgerResult<Money> {
        self.sum_where(|t| t.is_expense() && t.category == category)
    }
}
