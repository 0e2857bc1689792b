use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::load_log;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

/// Print the internal operation log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Log { print } = cmd else {
        return Ok(());
    };

    if !print {
        info("use --print to show the log");
        return Ok(());
    }

    let store = open_store(cfg)?;
    let rows = load_log(&store.conn)?;

    if rows.is_empty() {
        info("log is empty");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column {
            header: "date".to_string(),
            width: 32,
        },
        Column {
            header: "operation".to_string(),
            width: 10,
        },
        Column {
            header: "message".to_string(),
            width: 40,
        },
    ]);
    for (date, operation, message) in rows {
        table.add_row(vec![date, operation, message]);
    }
    print!("{}", table.render());

    Ok(())
}
