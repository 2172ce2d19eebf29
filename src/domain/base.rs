/// Shared result and error types for store operations
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the page store.
///
/// Every backend failure is translated into one of these variants and
/// returned through the `Result` — never panicked, never dropped. The store
/// performs no recovery of its own; retry policy belongs to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Backend unreachable or connection acquisition failed
    #[error("connection failed: {0}")]
    Connection(String),
    /// Query rejected or failed mid-flight
    #[error("query failed: {0}")]
    Query(String),
    /// A page with this name already exists
    #[error("page '{0}' already exists")]
    DuplicateKey(String),
    /// No page with this id
    #[error("no page with id {0}")]
    NotFound(i64),
    /// Caller-supplied argument failed domain validation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
