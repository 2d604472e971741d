//! Category endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CategorySummary>>> {
    let categories = state.source.categories()?;
    Ok(Json(categories))
}
