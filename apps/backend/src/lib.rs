pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use faq_core::FaqSource;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::catalog::Catalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn FaqSource>,
}

impl AppState {
    pub fn new(source: impl FaqSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/health", get(routes::health::status))
        .route("/api/categories", get(routes::categories::list))
        .route("/api/faq", get(routes::faq::list))
        .route("/api/faq/:id", get(routes::faq::detail))
        .route("/api/faq/:id/highlight", get(routes::faq::highlight_item))
        .route("/api/search", get(routes::search::search))
        .route("/api/suggest", get(routes::search::suggest))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::bundled()?,
    };
    if catalog.is_empty() {
        tracing::warn!("FAQ catalog is empty");
    }

    let app = build_router(AppState::new(catalog));

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
