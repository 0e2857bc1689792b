use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::oplog;
use crate::store::sqlite::SqliteStore;
use crate::ui::messages::success;

/// Initialize configuration and state store.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    // Opening the store creates the schema.
    let db_path = match &cli.db {
        Some(p) => p.clone(),
        None => Config::database_file().to_string_lossy().to_string(),
    };
    let store = SqliteStore::open(&db_path)?;
    oplog(&store.conn, "init", &db_path, "Store initialized")?;
    success(format!("Database initialized at {db_path}"));

    Ok(())
}
