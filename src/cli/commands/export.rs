use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::export::ExportLogic;
use crate::core::random::ThreadRandom;
use crate::errors::{AppError, AppResult};
use crate::models::stop::default_route;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::path::expand_tilde;

/// Export attendance records or the event history.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        format,
        file,
        range,
        history,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;
    let dest = expand_tilde(file).to_string_lossy().to_string();

    if *history {
        ExportLogic::export_history(&store, *format, &dest, *force)?;
        success(format!("event history exported to {dest}"));
        return Ok(());
    }

    let clock = SystemClock;
    let mut rng = ThreadRandom;
    let route = default_route();

    let dates = match range {
        Some(r) => date::dates_for_range(r).map_err(AppError::Export)?,
        None => vec![clock.today()],
    };

    ExportLogic::export_records(
        &mut store, &clock, &mut rng, &route, &dates, *format, &dest, *force,
    )?;
    success(format!("{} record(s) exported to {dest}", dates.len()));

    Ok(())
}
