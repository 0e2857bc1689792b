use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::errors::AppResult;
use crate::store::log::oplog;
use crate::ui::messages::success;

/// Destroy the current trip session; `--all` wipes every stored record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Reset { all } = cmd else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;

    if *all {
        let removed = ResetLogic::all(&mut store)?;
        oplog(&store.conn, "reset", "", "Full state wipe")?;
        success(format!("removed {removed} stored record(s)"));
    } else {
        ResetLogic::session(&mut store)?;
        oplog(&store.conn, "reset", "", "Session destroyed")?;
        success("session reset; a new trip starts on the next command");
    }

    Ok(())
}
