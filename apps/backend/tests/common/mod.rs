//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up a server over a fixture catalog
//! - Helper functions for creating test data

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use ipad_help_backend::services::catalog::Catalog;
use ipad_help_backend::{build_router, AppState};

/// Test context wrapping the router built from an in-memory catalog.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a test context serving the fixture catalog.
    pub fn new() -> Self {
        Self::with_catalog(fixtures::catalog())
    }

    /// Create a test context serving the catalog bundled with the server.
    pub fn bundled() -> Self {
        Self::with_catalog(Catalog::bundled().expect("bundled catalog must load"))
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            app: build_router(AppState::new(catalog)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("failed to start test server")
    }
}
