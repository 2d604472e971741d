//! In-memory FAQ catalog loaded from JSON.

use std::collections::HashSet;
use std::path::Path;

use faq_core::matching::{highlight, is_searchable, matches, rank_and_filter};
use faq_core::{category_counts, CategorySummary, FaqItem, FaqSource, HighlightMode, StoreError};
use thiserror::Error;

/// Catalog shipped with the server.
const BUNDLED_CATALOG: &str = include_str!("../../data/faq_items.json");

const QUESTION_PHRASE_SCORE: u32 = 10;
const ANSWER_PHRASE_SCORE: u32 = 5;
const QUESTION_WORD_SCORE: u32 = 3;
const ANSWER_WORD_SCORE: u32 = 1;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate FAQ id: {0}")]
    DuplicateId(String),
}

/// Read-only FAQ catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<FaqItem>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn from_items(items: Vec<FaqItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Parse a JSON array of FAQ items.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<FaqItem> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    /// Load a JSON catalog from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), items = catalog.len(), "Loaded FAQ catalog");
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUNDLED_CATALOG)?;
        tracing::info!(items = catalog.len(), "Loaded bundled FAQ catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FaqSource for Catalog {
    fn categories(&self) -> faq_core::Result<Vec<CategorySummary>> {
        Ok(category_counts(&self.items))
    }

    fn items(
        &self,
        category: Option<&str>,
        search: Option<&str>,
        limit: usize,
    ) -> faq_core::Result<Vec<FaqItem>> {
        // The limit caps the category scan; the search filter runs afterwards.
        let selected: Vec<FaqItem> = self
            .items
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .take(limit)
            .cloned()
            .collect();

        match search.filter(|s| !s.is_empty()) {
            Some(query) => Ok(rank_and_filter(&selected, query)),
            None => Ok(selected),
        }
    }

    fn item(&self, id: &str) -> faq_core::Result<FaqItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn search(&self, query: &str, limit: usize) -> faq_core::Result<Vec<FaqItem>> {
        if !is_searchable(query) {
            return Ok(Vec::new());
        }
        let query = query.trim();

        // Word hits only order the results; membership needs the whole phrase.
        let mut scored: Vec<(&FaqItem, u32)> = self
            .items
            .iter()
            .filter(|item| matches(item, query))
            .map(|item| (item, relevance_score(item, query)))
            .collect();

        // Stable, so equal scores keep catalog order.
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        tracing::debug!(query, hits = scored.len(), "Scored catalog search");

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(item, _)| item.clone())
            .collect())
    }
}

/// Phrase hits weigh more than single-word hits, question more than answer.
pub fn relevance_score(item: &FaqItem, query: &str) -> u32 {
    let mut score = 0;

    if contains(&item.question, query) {
        score += QUESTION_PHRASE_SCORE;
    }
    if contains(&item.answer, query) {
        score += ANSWER_PHRASE_SCORE;
    }

    for word in query.split_whitespace() {
        if contains(&item.question, word) {
            score += QUESTION_WORD_SCORE;
        }
        if contains(&item.answer, word) {
            score += ANSWER_WORD_SCORE;
        }
    }

    score
}

fn contains(text: &str, query: &str) -> bool {
    !highlight(text, query, HighlightMode::First).is_empty()
}
