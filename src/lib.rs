//! Asynchronous key-addressable store for wiki pages.
//!
//! The crate is organized in three layers:
//! - [`domain`] holds the `Page` entity and the error taxonomy shared by
//!   every operation.
//! - [`application`] holds the `PageStore` backend trait and the
//!   [`PageStoreService`] façade that exposes the store asynchronously.
//! - [`infrastructure`] holds the SQLite-backed `PageStore` implementation.
//!
//! The service is a stateless pass-through: every call is one round trip
//! against the backend, completing with either a success value or a
//! [`StoreError`], never both.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{PageStore, PageStoreService};
pub use config::StoreConfig;
pub use domain::{Page, StoreError, StoreResult};
pub use infrastructure::persistence::{initialize_database, SqlitePageStore};
