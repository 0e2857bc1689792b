//! SQLite-backed state store (lightweight, single connection for CLI usage).

use crate::errors::AppResult;
use crate::store::{StateStore, migrate};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct SqliteStore {
    pub conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the store and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        migrate::run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}

impl StateStore for SqliteStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM state WHERE key = ?1")?;
        let value: Option<String> = stmt.query_row([key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn set_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO state (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove_raw(&mut self, key: &str) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM state WHERE key = ?1", [key])?;
        Ok(())
    }

    fn list_keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM state")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
