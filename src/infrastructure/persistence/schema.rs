use rusqlite::{Connection, Result};

/// Initialize the SQLite database with the pages table.
/// This function is idempotent and can be safely called multiple times.
///
/// AUTOINCREMENT keeps ids monotonic for the lifetime of the database, so an
/// id is never reused after its page is deleted.
pub fn initialize_database(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS pages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}
