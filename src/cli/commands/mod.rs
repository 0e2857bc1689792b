pub mod absent;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod db;
pub mod export;
pub mod history;
pub mod init;
pub mod late;
pub mod log;
pub mod profile;
pub mod reset;
pub mod roster;
pub mod status;
pub mod watch;

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SqliteStore;

/// Open the state store configured for this invocation.
pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    SqliteStore::open(&cfg.database)
}
