//! Interface to the FAQ store.

use crate::error::Result;
use crate::types::{CategorySummary, FaqItem};

/// Read access to FAQ content.
///
/// Implementations may be backed by a REST API, a bundled JSON resource or
/// an in-memory list. Returned items are owned copies.
pub trait FaqSource: Send + Sync {
    /// All categories with their item counts.
    fn categories(&self) -> Result<Vec<CategorySummary>>;

    /// Items, optionally restricted to one category and to a search query.
    fn items(&self, category: Option<&str>, search: Option<&str>, limit: usize)
        -> Result<Vec<FaqItem>>;

    /// A single item by id.
    fn item(&self, id: &str) -> Result<FaqItem>;

    /// Items matching `query`, most relevant first.
    fn search(&self, query: &str, limit: usize) -> Result<Vec<FaqItem>>;
}
