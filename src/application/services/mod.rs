pub mod page_store_service;

pub use page_store_service::PageStoreService;
