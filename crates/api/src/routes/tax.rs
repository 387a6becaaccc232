//! Indicative corporate tax route.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use crate::{AppState, response::error_response};
use jaarrekening_core::report::check_amount;
use jaarrekening_shared::AppError;

/// Creates the tax routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/corporate-tax/indicative", post(indicative_tax))
}

/// Request body for an indicative tax estimate.
#[derive(Debug, Deserialize)]
pub struct IndicativeTaxRequest {
    /// Profit before corporate tax.
    pub profit_before_tax: Decimal,
}

/// POST /corporate-tax/indicative
///
/// Applies the fixed 19% estimate. Nothing else is derived or stored.
async fn indicative_tax(
    State(state): State<AppState>,
    payload: Result<Json<IndicativeTaxRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected indicative tax body");
            return error_response(&AppError::BadRequest(rejection.body_text()));
        }
    };

    let profit_before_tax = match check_amount("profit_before_tax", request.profit_before_tax) {
        Ok(amount) => amount,
        Err(e) => {
            warn!(error = %e, "Invalid indicative tax input");
            return error_response(&AppError::from(e));
        }
    };

    let estimate = state.engine.indicative_corporate_tax(profit_before_tax);

    (StatusCode::OK, Json(estimate)).into_response()
}
