//! FAQ item endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use faq_core::{highlight, parse_answer, segments};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/faq
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<FaqListQuery>,
) -> Result<Json<Vec<FaqItem>>> {
    let items = state.source.items(
        query.category.as_deref(),
        query.search.as_deref(),
        query.limit.unwrap_or(DEFAULT_LIST_LIMIT),
    )?;
    Ok(Json(items))
}

/// GET /api/faq/:id
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FaqDetailResponse>> {
    let item = state.source.item(&id)?;
    let sections = parse_answer(&item.answer);

    tracing::debug!(id = %item.id, sections = sections.len(), "Parsed answer");

    Ok(Json(FaqDetailResponse { item, sections }))
}

/// GET /api/faq/:id/highlight
///
/// Defaults to first-match highlighting, as used by the article view.
pub async fn highlight_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<HighlightQuery>,
) -> Result<Json<FaqHighlightResponse>> {
    let mode = parse_mode(query.mode.as_deref(), HighlightMode::First)?;
    let item = state.source.item(&id)?;

    let term = query.q.trim();
    let question_spans = highlight(&item.question, term, mode);
    let answer_spans = highlight(&item.answer, term, mode);

    Ok(Json(FaqHighlightResponse {
        question_segments: segments(&item.question, &question_spans),
        answer_segments: segments(&item.answer, &answer_spans),
        item,
        mode,
        question_spans,
        answer_spans,
    }))
}
