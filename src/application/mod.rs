pub mod repositories;
pub mod services;

pub use repositories::PageStore;
pub use services::PageStoreService;
