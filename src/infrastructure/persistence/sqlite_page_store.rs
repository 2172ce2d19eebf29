use crate::application::repositories::PageStore;
use crate::config::StoreConfig;
use crate::domain::{Page, StoreError, StoreResult};
use rusqlite::{params, Connection, ErrorCode};
use std::path::Path;
use std::time::Duration;

/// SQLite-based implementation of the PageStore trait
pub struct SqlitePageStore {
    conn: Connection,
}

impl SqlitePageStore {
    /// Create a new store over an already opened connection.
    /// The schema is initialized if not present.
    pub fn new(conn: Connection) -> StoreResult<Self> {
        super::schema::initialize_database(&conn).map_err(query_error)?;
        Ok(SqlitePageStore { conn })
    }

    /// Create a new in-memory store (useful for testing)
    pub fn new_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(connection_error)?;
        Self::new(conn)
    }

    /// Create a new file-based store
    pub fn new_with_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path).map_err(connection_error)?;
        Self::new(conn)
    }

    /// Open a store according to the given configuration: file-backed when a
    /// path is configured, in-memory otherwise.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        let conn = match &config.db_path {
            Some(path) => Connection::open(path).map_err(connection_error)?,
            None => Connection::open_in_memory().map_err(connection_error)?,
        };
        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
            .map_err(connection_error)?;
        Self::new(conn)
    }

    fn row_to_page(row: &rusqlite::Row<'_>) -> rusqlite::Result<Page> {
        Ok(Page {
            id: row.get(0)?,
            name: row.get(1)?,
            content: row.get(2)?,
        })
    }
}

fn connection_error(e: rusqlite::Error) -> StoreError {
    StoreError::Connection(e.to_string())
}

fn query_error(e: rusqlite::Error) -> StoreError {
    StoreError::Query(e.to_string())
}

impl PageStore for SqlitePageStore {
    fn all_page_names(&self) -> StoreResult<Vec<String>> {
        // Callers expect the listing sorted alphabetically; ORDER BY keeps
        // the order deterministic across calls.
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM pages ORDER BY name")
            .map_err(query_error)?;

        let names = stmt
            .query_map([], |row| row.get(0))
            .map_err(query_error)?
            .collect::<rusqlite::Result<Vec<String>>>()
            .map_err(query_error)?;

        Ok(names)
    }

    fn all_pages(&self) -> StoreResult<Vec<Page>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, content FROM pages ORDER BY name")
            .map_err(query_error)?;

        let pages = stmt
            .query_map([], Self::row_to_page)
            .map_err(query_error)?
            .collect::<rusqlite::Result<Vec<Page>>>()
            .map_err(query_error)?;

        Ok(pages)
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<Page>> {
        let result = self.conn.query_row(
            "SELECT id, name, content FROM pages WHERE name = ?1",
            params![name],
            Self::row_to_page,
        );

        match result {
            Ok(page) => Ok(Some(page)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(query_error(e)),
        }
    }

    fn find_by_id(&self, id: i64) -> StoreResult<Option<Page>> {
        let result = self.conn.query_row(
            "SELECT id, name, content FROM pages WHERE id = ?1",
            params![id],
            Self::row_to_page,
        );

        match result {
            Ok(page) => Ok(Some(page)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(query_error(e)),
        }
    }

    fn insert(&mut self, name: &str, content: &str) -> StoreResult<()> {
        self.conn
            .execute(
                "INSERT INTO pages (name, content, created_at, updated_at)
                 VALUES (?1, ?2, datetime('now'), datetime('now'))",
                params![name, content],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == ErrorCode::ConstraintViolation =>
                {
                    StoreError::DuplicateKey(name.to_string())
                }
                other => query_error(other),
            })?;

        tracing::debug!(name, "page created");
        Ok(())
    }

    fn update_content(&mut self, id: i64, content: &str) -> StoreResult<bool> {
        let rows_affected = self
            .conn
            .execute(
                "UPDATE pages SET content = ?1, updated_at = datetime('now') WHERE id = ?2",
                params![content, id],
            )
            .map_err(query_error)?;

        Ok(rows_affected > 0)
    }

    fn delete(&mut self, id: i64) -> StoreResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM pages WHERE id = ?1", params![id])
            .map_err(query_error)?;

        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_pages(pages: &[(&str, &str)]) -> SqlitePageStore {
        let mut store = SqlitePageStore::new_in_memory().unwrap();
        for (name, content) in pages {
            store.insert(name, content).unwrap();
        }
        store
    }

    #[test]
    fn test_insert_and_find_by_name() {
        let store = store_with_pages(&[("Home", "welcome")]);

        let page = store.find_by_name("Home").unwrap().unwrap();
        assert_eq!(page.name, "Home");
        assert_eq!(page.content, "welcome");
        assert!(page.id > 0);
    }

    #[test]
    fn test_find_by_id() {
        let store = store_with_pages(&[("Home", "welcome")]);

        let id = store.find_by_name("Home").unwrap().unwrap().id;
        let page = store.find_by_id(id).unwrap().unwrap();
        assert_eq!(page.name, "Home");
    }

    #[test]
    fn test_find_miss_is_none_not_error() {
        let store = store_with_pages(&[]);
        assert!(store.find_by_name("missing").unwrap().is_none());
        assert!(store.find_by_id(999).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_name_maps_to_duplicate_key() {
        let mut store = store_with_pages(&[("Home", "first")]);

        let err = store.insert("Home", "second").unwrap_err();
        assert_eq!(err, StoreError::DuplicateKey("Home".to_string()));

        // First write must be intact
        let page = store.find_by_name("Home").unwrap().unwrap();
        assert_eq!(page.content, "first");
    }

    #[test]
    fn test_names_sorted_lexicographically() {
        let store = store_with_pages(&[("cherry", ""), ("apple", ""), ("banana", "")]);

        let names = store.all_page_names().unwrap();
        assert_eq!(names, vec!["apple", "banana", "cherry"]);

        let pages = store.all_pages().unwrap();
        let data_names: Vec<&str> = pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(data_names, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_update_content_only() {
        let mut store = store_with_pages(&[("Home", "old")]);
        let id = store.find_by_name("Home").unwrap().unwrap().id;

        assert!(store.update_content(id, "new").unwrap());

        let page = store.find_by_id(id).unwrap().unwrap();
        assert_eq!(page.content, "new");
        assert_eq!(page.name, "Home");
        assert_eq!(page.id, id);
    }

    #[test]
    fn test_update_missing_id_reports_no_row() {
        let mut store = store_with_pages(&[]);
        assert!(!store.update_content(42, "content").unwrap());
    }

    #[test]
    fn test_delete() {
        let mut store = store_with_pages(&[("Home", "")]);
        let id = store.find_by_name("Home").unwrap().unwrap().id;

        assert!(store.delete(id).unwrap());
        assert!(store.find_by_id(id).unwrap().is_none());
        assert!(!store.delete(id).unwrap());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = store_with_pages(&[("first", "")]);
        let first_id = store.find_by_name("first").unwrap().unwrap().id;

        assert!(store.delete(first_id).unwrap());
        store.insert("second", "").unwrap();

        let second_id = store.find_by_name("second").unwrap().unwrap().id;
        assert!(second_id > first_id);
    }

    #[test]
    fn test_from_config_defaults_to_in_memory() {
        let mut store = SqlitePageStore::from_config(&StoreConfig::default()).unwrap();
        store.insert("Home", "hi").unwrap();
        assert_eq!(store.all_page_names().unwrap(), vec!["Home"]);
    }
}
