//! Core FAQ library shared by the help-center clients and backend.
//!
//! Provides:
//! - Section parser for markdown-like answers
//! - Case-insensitive search matching with highlight spans
//! - Insertion-ordered grouping of results by category
//! - Shared types (FaqItem, AnswerSection, HighlightSpan, etc.)

pub mod error;
pub mod grouping;
pub mod matching;
pub mod parser;
pub mod source;
pub mod types;

#[cfg(test)]
mod proptests;

pub use error::{Result, StoreError};
pub use grouping::{category_counts, group_by_category, group_by_key, group_results};
pub use matching::{
    build_results, highlight, is_searchable, matches, rank_and_filter, segments, MIN_QUERY_CHARS,
};
pub use parser::{answer_preview, parse_answer, SEARCH_PREVIEW_CHARS};
pub use source::FaqSource;
pub use types::{
    AnswerSection, CategoryGroup, CategorySummary, FaqItem, HighlightMode, HighlightSegment,
    HighlightSpan, SearchResult, SectionKind,
};
