//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for report generation, tax estimates and bank files
//! - Application state carrying the injected report collaborators
//! - JSON error responses

pub mod response;
pub mod routes;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use jaarrekening_core::{
    export::PdfExporter,
    ingest::BankFileIngestor,
    report::{DerivationEngine, DocumentAssembler},
};
use jaarrekening_shared::AppConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Computes derived figures.
    pub engine: Arc<DerivationEngine>,
    /// Builds the document sections.
    pub assembler: Arc<DocumentAssembler>,
    /// Renders documents to PDF.
    pub exporter: Arc<PdfExporter>,
    /// Inspects uploaded bank files.
    pub ingestor: Arc<BankFileIngestor>,
    /// Request body limit in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Wires the collaborators from configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            engine: Arc::new(DerivationEngine::new()),
            assembler: Arc::new(DocumentAssembler::new(config.report.currency)),
            exporter: Arc::new(PdfExporter::new(config.export.clone())),
            ingestor: Arc::new(BankFileIngestor::new()),
            max_upload_bytes: config.server.max_upload_bytes,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .merge(routes::reports::legacy_routes())
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
