//! Budget limit model
//!
//! One spending limit per category. Setting a limit again replaces the old
//! one; limits never accumulate.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A per-category spending limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLimit {
    pub category: String,
    pub limit_amount: Money,
}

impl BudgetLimit {
    pub fn new(category: impl Into<String>, limit_amount: Money) -> Self {
        Self {
            category: category.into(),
            limit_amount,
        }
    }
}

/// A limit compared against what has actually been spent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
}

impl BudgetStatus {
    /// Limit minus spend; negative once the category is overspent
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    /// Spending strictly above the limit. Spending exactly the limit is not over.
    pub fn is_over(&self) -> bool {
        self.spent > self.limit
    }
}
