//! Search endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use faq_core::{build_results, group_results, is_searchable};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/search
///
/// Queries shorter than two characters return an empty result, not an error.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    let mode = parse_mode(query.mode.as_deref(), HighlightMode::All)?;

    if !is_searchable(&query.q) {
        return Ok(Json(SearchResponse::empty(query.q)));
    }
    let term = query.q.trim();

    let ranked = state
        .source
        .search(term, query.limit.unwrap_or(DEFAULT_SEARCH_LIMIT))?;
    let results = build_results(&ranked, term, mode);

    tracing::info!(query = term, results = results.len(), "Search");

    Ok(Json(SearchResponse {
        query: term.to_string(),
        total: results.len(),
        groups: group_results(results),
    }))
}

/// GET /api/suggest
pub async fn suggest(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> Result<Json<SuggestResponse>> {
    if !is_searchable(&query.q) {
        return Ok(Json(SuggestResponse {
            suggestions: Vec::new(),
        }));
    }
    let term = query.q.trim();

    let ranked = state.source.search(term, SUGGESTION_LIMIT)?;
    let suggestions = build_results(&ranked, term, HighlightMode::All);

    Ok(Json(SuggestResponse { suggestions }))
}
