use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `state` key/value table exists.
fn ensure_state_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS state (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `state` table has an `updated_at` column.
fn state_has_updated_at(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('state')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "updated_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Migrate a pre-0.3 `state` table (no `updated_at`) to the modern schema.
fn migrate_add_updated_at(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "state")? || state_has_updated_at(conn)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        BEGIN;

        ALTER TABLE state RENAME TO state_old;

        CREATE TABLE state (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        INSERT INTO state (key, value, updated_at)
        SELECT key, value, '' FROM state_old;

        DROP TABLE state_old;

        COMMIT;
        "#,
    )?;

    Ok(())
}

/// Bring the database up to the current schema. Idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    migrate_add_updated_at(conn)?;
    ensure_state_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
