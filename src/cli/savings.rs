//! Savings CLI command

use crate::config::Settings;
use crate::display::format_savings;
use crate::error::LedgerResult;
use crate::services::SavingsManager;
use crate::storage::LedgerStore;

pub fn handle_savings_command(store: &dyn LedgerStore, settings: &Settings) -> LedgerResult<()> {
    let summary = SavingsManager::new(store).summary()?;
    print!("{}", format_savings(&summary, &settings.currency_symbol));
    Ok(())
}
