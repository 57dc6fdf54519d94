//! Service layer
//!
//! Domain managers on top of the store. They validate input and derive
//! answers from stored rows; none of them keeps state between calls.

pub mod budget;
pub mod savings;

pub use budget::BudgetManager;
pub use savings::{SavingsManager, SavingsSummary};
