//! Error types for faq-core.

use thiserror::Error;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors reported by an FAQ store.
///
/// Parsing and matching never fail; only data access does.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("FAQ item not found: {0}")]
    NotFound(String),

    #[error("FAQ store unavailable: {0}")]
    Unavailable(String),
}
