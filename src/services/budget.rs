//! Budget manager
//!
//! A thin validating layer over the store's budget relation. It holds no state
//! of its own: every question is answered from the store's current rows.

use crate::error::{LedgerError, LedgerResult};
use crate::models::transaction::validate_category;
use crate::models::{BudgetStatus, Money};
use crate::storage::LedgerStore;

/// Sets and evaluates per-category spending limits
pub struct BudgetManager<'a> {
    store: &'a dyn LedgerStore,
}

impl<'a> BudgetManager<'a> {
    pub fn new(store: &'a dyn LedgerStore) -> Self {
        Self { store }
    }

    /// Set (or replace) the spending limit for a category
    pub fn set_budget(&self, category: &str, amount: Money) -> LedgerResult<()> {
        if !amount.is_positive() {
            return Err(LedgerError::validation("budget must be positive"));
        }
        let category = validate_category(category.to_string())?;

        self.store.set_budget(&category, amount)
    }

    /// Whether spending in a category has gone strictly past its limit
    ///
    /// A category with no limit is never over budget. Categories are trimmed
    /// the same way `set_budget` trims them.
    pub fn is_over_budget(&self, category: &str) -> LedgerResult<bool> {
        Ok(self.status(category)?.is_some_and(|s| s.is_over()))
    }

    /// Limit and spend for one category, or `None` if it has no limit
    pub fn status(&self, category: &str) -> LedgerResult<Option<BudgetStatus>> {
        let category = category.trim();
        let Some(limit) = self.store.get_budget(category)? else {
            return Ok(None);
        };

        let status = BudgetStatus {
            category: category.to_string(),
            limit,
            spent: self.store.get_category_expense(category)?,
        };
        if status.is_over() {
            tracing::warn!(category, limit = %status.limit, spent = %status.spent, "category over budget");
        }
        Ok(Some(status))
    }

    /// Status of every category that has a limit, ordered by category
    pub fn overview(&self) -> LedgerResult<Vec<BudgetStatus>> {
        self.store
            .list_budgets()?
            .into_iter()
            .map(|budget| {
                Ok(BudgetStatus {
                    spent: self.store.get_category_expense(&budget.category)?,
                    category: budget.category,
                    limit: budget.limit_amount,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use crate::storage::SqliteStore;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn expense(store: &SqliteStore, category: &str, cents: i64) {
        store
            .add_transaction(TransactionKind::Expense, category, Money::from_cents(cents), d(1))
            .unwrap();
    }

    #[test]
    fn test_non_positive_budget_rejected() {
        let store = SqliteStore::open_in_memory().unwrap();
        let manager = BudgetManager::new(&store);

        for cents in [0, -100] {
            let err = manager.set_budget("Food", Money::from_cents(cents)).unwrap_err();
            assert!(err.is_validation());
            assert!(err.to_string().contains("budget must be positive"));
        }
        assert_eq!(store.get_budget("Food").unwrap(), None);
    }

    #[test]
    fn test_no_budget_is_never_over() {
        let store = SqliteStore::open_in_memory().unwrap();
        expense(&store, "Food", 1_000_000);

        let manager = BudgetManager::new(&store);
        assert!(!manager.is_over_budget("Food").unwrap());
        assert!(!manager.is_over_budget("Never Used").unwrap());
        assert_eq!(manager.status("Food").unwrap(), None);
    }

    #[test]
    fn test_equal_spend_is_not_over() {
        let store = SqliteStore::open_in_memory().unwrap();
        let manager = BudgetManager::new(&store);
        manager.set_budget("Food", Money::from_units(100)).unwrap();

        expense(&store, "Food", 6_000);
        expense(&store, "Food", 4_000);
        assert!(!manager.is_over_budget("Food").unwrap());

        expense(&store, "Food", 1);
        assert!(manager.is_over_budget("Food").unwrap());
    }

    #[test]
    fn test_income_does_not_count_toward_spend() {
        let store = SqliteStore::open_in_memory().unwrap();
        let manager = BudgetManager::new(&store);
        manager.set_budget("Food", Money::from_units(10)).unwrap();

        store
            .add_transaction(TransactionKind::Income, "Food", Money::from_units(50), d(2))
            .unwrap();
        assert!(!manager.is_over_budget("Food").unwrap());
    }

    #[test]
    fn test_resetting_budget_replaces_limit() {
        let store = SqliteStore::open_in_memory().unwrap();
        let manager = BudgetManager::new(&store);
        expense(&store, "Food", 15_000);

        manager.set_budget("Food", Money::from_units(100)).unwrap();
        assert!(manager.is_over_budget("Food").unwrap());

        manager.set_budget("Food", Money::from_units(200)).unwrap();
        assert!(!manager.is_over_budget("Food").unwrap());
        assert_eq!(store.get_budget("Food").unwrap(), Some(Money::from_units(200)));
    }

    #[test]
    fn test_overview() {
        let store = SqliteStore::open_in_memory().unwrap();
        let manager = BudgetManager::new(&store);
        manager.set_budget("Rent", Money::from_units(900)).unwrap();
        manager.set_budget(" Food ", Money::from_units(1000)).unwrap();
        expense(&store, "Food", 150_000);

        let overview = manager.overview().unwrap();
        assert_eq!(overview.len(), 2);
        assert_eq!(overview[0].category, "Food");
        assert!(overview[0].is_over());
        assert_eq!(overview[0].remaining(), Money::from_units(-500));
        assert_eq!(overview[1].category, "Rent");
        assert!(overview[1].spent.is_zero());
    }

    #[test]
    fn test_lookups_trim_like_set_budget() {
        let store = SqliteStore::open_in_memory().unwrap();
        let manager = BudgetManager::new(&store);
        manager.set_budget(" Food ", Money::from_units(100)).unwrap();
        expense(&store, "Food", 10_001);

        assert!(manager.is_over_budget(" Food ").unwrap());
        let status = manager.status("Food\t").unwrap().unwrap();
        assert_eq!(status.category, "Food");
        assert_eq!(status.limit, Money::from_units(100));
    }
}
