//! Health endpoints

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

/// GET /api/health
pub async fn status(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let items: usize = state
        .source
        .categories()?
        .iter()
        .map(|c| c.count)
        .sum();

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        items,
        timestamp: Utc::now(),
    }))
}
