//! SQLite schema creation.

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Failed to create database directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Create the `books` table if it doesn't exist.
///
/// Idempotent: safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open or create a library database at the given path.
///
/// Missing parent directories are created.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    create_schema(&conn)?;
    log::debug!("Opened library database at {}", path.display());

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
-- Uniqueness of (title, author, type, tome) is checked before insert,
-- not enforced by an index.
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    author TEXT,
    type TEXT,
    tome INTEGER
);
"#;
