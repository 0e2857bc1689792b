use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::ledger::EventLedger;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// List the dates with a recorded absence event.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let history = EventLedger::history(&store)?;

    if history.is_empty() {
        info("no absence events recorded");
        return Ok(());
    }

    for date in history {
        println!("{date}");
    }

    Ok(())
}
