use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{keys, migrate};
use crate::ui::messages::{info, success};

/// Database maintenance: migrations, integrity check, info.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate: do_migrate,
        check,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let store = open_store(cfg)?;

    if *do_migrate {
        migrate::run_pending_migrations(&store.conn)?;
        success("database schema is up to date");
    }

    if *check {
        let result: String =
            store
                .conn
                .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if result == "ok" {
            success("integrity check passed");
        } else {
            return Err(AppError::Migration(format!(
                "integrity check failed: {result}"
            )));
        }
    }

    if *show_info {
        use crate::store::StateStore;

        let all = store.list_keys()?;
        let current = all.iter().filter(|k| keys::is_current(k)).count();
        let records = all
            .iter()
            .filter(|k| k.starts_with(&keys::record("")))
            .count();

        info(format!("database:        {}", cfg.database));
        info(format!("schema version:  v{}", keys::SCHEMA_VERSION));
        info(format!("stored keys:     {} ({} current)", all.len(), current));
        info(format!("date records:    {records}"));
    }

    Ok(())
}
