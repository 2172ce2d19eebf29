/// Entities for the domain layer
use serde::{Deserialize, Serialize};

/// A wiki page: a named document with an integer id and a text body.
///
/// The `id` is assigned by the storage backend at creation and never changes;
/// `name` is unique among pages and serves as an alternate lookup key. Only
/// `content` is mutable, via save operations keyed by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: i64,
    pub name: String,
    pub content: String,
}

impl Page {
    pub fn new(id: i64, name: impl Into<String>, content: impl Into<String>) -> Self {
        Page {
            id,
            name: name.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_equality_is_structural() {
        let a = Page::new(1, "Home", "hello");
        let b = Page::new(1, "Home", "hello");
        let c = Page::new(1, "Home", "changed");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_page_json_round_trip() {
        let page = Page::new(7, "Sandbox", "# scratch");
        let json = serde_json::to_string(&page).unwrap();
        let back: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(page, back);
    }
}
