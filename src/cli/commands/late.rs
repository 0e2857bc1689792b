use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::random::ThreadRandom;
use crate::core::session::SessionMachine;
use crate::errors::AppResult;
use crate::models::stop::default_route;
use crate::store::log::oplog;
use crate::ui::messages::{notice, success, warning};

/// Request or cancel a late boarding for today's trip.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Late { cancel } = cmd else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;
    let clock = SystemClock;
    let mut rng = ThreadRandom;
    let route = default_route();

    let mut machine = SessionMachine::load_or_init(&mut store, &clock, &mut rng, &route)?;

    if *cancel && !machine.state.is_late_requested {
        warning("no active late request to cancel");
        return Ok(());
    }
    if !*cancel && machine.state.is_late_requested {
        warning("a late request is already active");
        return Ok(());
    }

    match machine.toggle_late() {
        Ok(true) => {
            success("late boarding requested (2 per month, within 2 minutes)");
            oplog(&store.conn, "late", "", "Late request accepted")?;
        }
        Ok(false) => {
            success("late request cancelled");
            oplog(&store.conn, "late", "", "Late request cancelled")?;
        }
        Err(e) if e.is_refusal() => notice(e),
        Err(e) => return Err(e),
    }

    Ok(())
}
