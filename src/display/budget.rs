//! Budget and savings reports

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::BudgetStatus;
use crate::services::SavingsSummary;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "")]
    flag: &'static str,
}

/// Format every configured limit with its spend
pub fn format_budget_overview(statuses: &[BudgetStatus], currency_symbol: &str) -> String {
    if statuses.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows = statuses.iter().map(|s| BudgetRow {
        category: s.category.clone(),
        limit: s.limit.format_with_symbol(currency_symbol),
        spent: s.spent.format_with_symbol(currency_symbol),
        remaining: s.remaining().format_with_symbol(currency_symbol),
        flag: if s.is_over() { "OVER" } else { "" },
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(1..4), Alignment::right());
    format!("{}\n", table)
}

/// One-line answer for a single category check
pub fn format_budget_check(category: &str, status: Option<&BudgetStatus>, currency_symbol: &str) -> String {
    match status {
        None => format!("No budget set for '{}'.", category),
        Some(s) if s.is_over() => format!(
            "'{}' is over budget: spent {} of {}.",
            category,
            s.spent.format_with_symbol(currency_symbol),
            s.limit.format_with_symbol(currency_symbol)
        ),
        Some(s) => format!(
            "'{}' is within budget: spent {} of {}.",
            category,
            s.spent.format_with_symbol(currency_symbol),
            s.limit.format_with_symbol(currency_symbol)
        ),
    }
}

/// Savings report ending in a `Total Savings` line with the bare amount
pub fn format_savings(summary: &SavingsSummary, currency_symbol: &str) -> String {
    format!(
        "Income:        {:>12}\nExpenses:      {:>12}\nTotal Savings: {}\n",
        summary.income.format_with_symbol(currency_symbol),
        summary.expense.format_with_symbol(currency_symbol),
        summary.savings
    )
}
