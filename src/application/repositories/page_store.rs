use crate::domain::{Page, StoreResult};

/// Backend trait for persisting and retrieving pages.
///
/// This trait defines the contract the storage backend presents to the
/// service layer. Implementations can be backed by different storage
/// mechanisms (SQLite, in-memory, etc.). The backend exclusively owns the
/// persisted rows; callers hold no cached copies.
pub trait PageStore {
    /// Returns the names of all pages, sorted lexicographically.
    fn all_page_names(&self) -> StoreResult<Vec<String>>;

    /// Returns all pages as full records, sorted lexicographically by name.
    fn all_pages(&self) -> StoreResult<Vec<Page>>;

    /// Finds a page by its unique name.
    ///
    /// Returns `Ok(Some(page))` if found, `Ok(None)` if not found,
    /// or an error if the operation fails. A miss is not an error.
    fn find_by_name(&self, name: &str) -> StoreResult<Option<Page>>;

    /// Finds a page by its backend-assigned id. Same miss policy as
    /// [`find_by_name`](PageStore::find_by_name).
    fn find_by_id(&self, id: i64) -> StoreResult<Option<Page>>;

    /// Inserts a new page. The backend assigns the id.
    ///
    /// Fails with `StoreError::DuplicateKey` if a page with this name
    /// already exists; never overwrites.
    fn insert(&mut self, name: &str, content: &str) -> StoreResult<()>;

    /// Replaces the content of the page with the given id; name and id are
    /// untouched.
    ///
    /// Returns `Ok(true)` if a row was updated, `Ok(false)` if no row
    /// matched the id.
    fn update_content(&mut self, id: i64, content: &str) -> StoreResult<bool>;

    /// Deletes the page with the given id.
    ///
    /// Returns `Ok(true)` if the page was deleted, `Ok(false)` if no row
    /// matched the id.
    fn delete(&mut self, id: i64) -> StoreResult<bool>;
}
