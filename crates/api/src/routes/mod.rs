//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod bank_files;
pub mod health;
pub mod reports;
pub mod tax;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(reports::routes())
        .merge(tax::routes())
        .merge(bank_files::routes())
}
