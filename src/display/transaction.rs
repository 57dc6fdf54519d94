//! Transaction listing

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{TransactionRecord, DATE_FORMAT};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Render a date, falling back to `YYYY-MM-DD` when the format is unusable
fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        return date.format(DATE_FORMAT).to_string();
    }
    out
}

/// Format transactions as a table, oldest first
pub fn format_transaction_table(
    transactions: &[TransactionRecord],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No records found.\n".to_string();
    }

    let rows = transactions.iter().map(|t| TransactionRow {
        id: t.id,
        date: format_date(t.date, date_format),
        kind: t.kind.to_string(),
        category: t.category.clone(),
        amount: t.amount.format_with_symbol(currency_symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(4), Alignment::right());
    format!("{}\n", table)
}
