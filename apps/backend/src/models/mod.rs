//! Request and response types for the HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export shared types from faq-core
pub use faq_core::types::{
    AnswerSection, CategoryGroup, CategorySummary, FaqItem, HighlightMode, HighlightSegment,
    HighlightSpan, SearchResult, SectionKind,
};
pub use faq_core::FaqSource;

use crate::error::{ApiError, Result};

pub const DEFAULT_LIST_LIMIT: usize = 100;
pub const DEFAULT_SEARCH_LIMIT: usize = 20;
pub const SUGGESTION_LIMIT: usize = 5;

/// Resolve an optional `mode` query parameter.
pub fn parse_mode(raw: Option<&str>, default: HighlightMode) -> Result<HighlightMode> {
    match raw {
        None => Ok(default),
        Some(value) => HighlightMode::from_str(value)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown highlight mode: {}", value))),
    }
}

// === Query Parameters ===

/// GET /api/faq
#[derive(Debug, Default, Deserialize)]
pub struct FaqListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}

/// GET /api/search
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
    pub mode: Option<String>,
}

/// GET /api/suggest
#[derive(Debug, Default, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/faq/:id/highlight
#[derive(Debug, Default, Deserialize)]
pub struct HighlightQuery {
    #[serde(default)]
    pub q: String,
    pub mode: Option<String>,
}

// === Responses ===

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub items: usize,
    pub timestamp: DateTime<Utc>,
}

/// Single FAQ item with its answer split into sections
#[derive(Debug, Serialize, Deserialize)]
pub struct FaqDetailResponse {
    pub item: FaqItem,
    pub sections: Vec<AnswerSection>,
}

/// Match spans over the full question and answer of one item, plus the
/// same text pre-split into plain and highlighted runs
#[derive(Debug, Serialize, Deserialize)]
pub struct FaqHighlightResponse {
    pub item: FaqItem,
    pub mode: HighlightMode,
    pub question_spans: Vec<HighlightSpan>,
    pub answer_spans: Vec<HighlightSpan>,
    pub question_segments: Vec<HighlightSegment>,
    pub answer_segments: Vec<HighlightSegment>,
}

/// Search results grouped by category
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub groups: Vec<CategoryGroup<SearchResult>>,
}

impl SearchResponse {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            total: 0,
            groups: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<SearchResult>,
}
