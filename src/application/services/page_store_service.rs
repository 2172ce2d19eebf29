/// Asynchronous façade over a page store backend
use crate::application::repositories::PageStore;
use crate::domain::{Page, StoreError, StoreResult};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Asynchronous service exposing CRUD operations over a [`PageStore`].
///
/// The service is stateless apart from the shared backend handle: each call
/// is one round trip, there is no caching, no retry, and no cancellation.
/// Cloning the service shares the same backend, so concurrent callers are
/// independent; serialization of writes is the backend's concern.
pub struct PageStoreService<S: PageStore> {
    store: Arc<Mutex<S>>,
}

impl<S: PageStore> Clone for PageStoreService<S> {
    fn clone(&self) -> Self {
        PageStoreService {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: PageStore + Send + 'static> PageStoreService<S> {
    pub fn new(store: S) -> Self {
        PageStoreService {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Lists all page names, sorted lexicographically.
    pub async fn fetch_all_pages(&self) -> StoreResult<Vec<String>> {
        let store = self.store.lock().await;
        store.all_page_names()
    }

    /// Lists all pages as full records, in the same order as
    /// [`fetch_all_pages`](PageStoreService::fetch_all_pages).
    pub async fn fetch_all_pages_data(&self) -> StoreResult<Vec<Page>> {
        let store = self.store.lock().await;
        store.all_pages()
    }

    /// Fetches a page by name. A miss is `Ok(None)`, not an error.
    pub async fn fetch_page(&self, name: &str) -> StoreResult<Option<Page>> {
        Self::validate_name(name)?;
        let store = self.store.lock().await;
        store.find_by_name(name)
    }

    /// Fetches a page by id. Same miss policy as
    /// [`fetch_page`](PageStoreService::fetch_page).
    pub async fn fetch_page_by_id(&self, id: i64) -> StoreResult<Option<Page>> {
        Self::validate_id(id)?;
        let store = self.store.lock().await;
        store.find_by_id(id)
    }

    /// Creates a new page. The backend assigns the id; it is not returned —
    /// callers needing it re-fetch by name.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if the title is taken.
    pub async fn create_page(&self, title: &str, markdown: &str) -> StoreResult<()> {
        Self::validate_name(title)?;
        let mut store = self.store.lock().await;
        store.insert(title, markdown).map_err(|e| {
            tracing::error!(title, error = %e, "create_page failed");
            e
        })
    }

    /// Replaces the content of an existing page. Name and id are untouched.
    ///
    /// Fails with [`StoreError::NotFound`] if no page has this id; a silent
    /// no-op would mask caller bugs.
    pub async fn save_page(&self, id: i64, markdown: &str) -> StoreResult<()> {
        Self::validate_id(id)?;
        let mut store = self.store.lock().await;
        if store.update_content(id, markdown)? {
            Ok(())
        } else {
            Err(StoreError::NotFound(id))
        }
    }

    /// Deletes a page by id. Fails with [`StoreError::NotFound`] if no page
    /// has this id, mirroring [`save_page`](PageStoreService::save_page).
    pub async fn delete_page(&self, id: i64) -> StoreResult<()> {
        Self::validate_id(id)?;
        let mut store = self.store.lock().await;
        if store.delete(id)? {
            tracing::debug!(id, "page deleted");
            Ok(())
        } else {
            Err(StoreError::NotFound(id))
        }
    }

    fn validate_name(name: &str) -> StoreResult<()> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidArgument(
                "page name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_id(id: i64) -> StoreResult<()> {
        if id <= 0 {
            return Err(StoreError::InvalidArgument(format!(
                "page id must be positive, got {}",
                id
            )));
        }
        Ok(())
    }
}
