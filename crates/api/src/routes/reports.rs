//! Annual report routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::{AppState, response::error_response};
use jaarrekening_core::report::{
    AnnualReport, AnnualReportRequest, DerivationMode, DerivedFigures, FinancialRecord,
    SectionAnchor, render_annual_report,
};
use jaarrekening_shared::{AppError, AppResult};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/annual-reports", post(generate_report))
        .route("/annual-reports/pdf", post(generate_report_pdf))
}

/// Deprecated root paths still used by older clients.
pub fn legacy_routes() -> Router<AppState> {
    Router::new()
        .route("/generate-annual-report", post(generate_report))
        .route("/generate-annual-report-pdf", post(generate_report_pdf))
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for a generated report.
#[derive(Debug, Serialize)]
pub struct AnnualReportResponse {
    /// Rendered report text.
    pub document_text: String,
    /// Derivation mode selected by the supplied fields.
    pub mode: DerivationMode,
    /// Derived figures by name, in derivation order. Figures the mode does
    /// not produce are left out.
    pub derived_figures: DerivedFigures,
    /// Section anchors with their starting line.
    pub sections: Vec<SectionResponse>,
}

/// Section position in the rendered text.
#[derive(Debug, Serialize)]
pub struct SectionResponse {
    /// Section anchor.
    pub anchor: SectionAnchor,
    /// Zero-based line number of the section's first line.
    pub line: usize,
}

impl From<AnnualReport> for AnnualReportResponse {
    fn from(report: AnnualReport) -> Self {
        Self {
            sections: report
                .document
                .section_anchors()
                .iter()
                .map(|(anchor, line)| SectionResponse {
                    anchor: *anchor,
                    line: *line,
                })
                .collect(),
            derived_figures: report.figures,
            mode: report.mode,
            document_text: report.document.into_string(),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Decodes and validates the request body into a record.
fn parse_record(
    payload: Result<Json<AnnualReportRequest>, JsonRejection>,
) -> AppResult<FinancialRecord> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected annual report body");
        AppError::BadRequest(rejection.body_text())
    })?;

    FinancialRecord::try_from(request).map_err(|e| {
        warn!(error = %e, "Invalid annual report input");
        AppError::from(e)
    })
}

/// File name for the PDF attachment, restricted to ASCII letters and digits.
fn pdf_filename(record: &FinancialRecord) -> String {
    let slug = |s: &str| -> String {
        s.chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    };
    format!(
        "jaarrekening_{}_{}.pdf",
        slug(&record.company_name),
        slug(&record.fiscal_year)
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /annual-reports
async fn generate_report(
    State(state): State<AppState>,
    payload: Result<Json<AnnualReportRequest>, JsonRejection>,
) -> Response {
    let record = match parse_record(payload) {
        Ok(record) => record,
        Err(e) => return error_response(&e),
    };

    let report = render_annual_report(&state.engine, &state.assembler, &record);
    info!(
        company = %record.company_name,
        fiscal_year = %record.fiscal_year,
        mode = ?report.mode,
        "Annual report generated"
    );

    (StatusCode::OK, Json(AnnualReportResponse::from(report))).into_response()
}

/// POST /annual-reports/pdf
async fn generate_report_pdf(
    State(state): State<AppState>,
    payload: Result<Json<AnnualReportRequest>, JsonRejection>,
) -> Response {
    let record = match parse_record(payload) {
        Ok(record) => record,
        Err(e) => return error_response(&e),
    };

    let report = render_annual_report(&state.engine, &state.assembler, &record);
    let title = format!("Jaarrekening {} {}", record.company_name, record.fiscal_year);

    let bytes = match state.exporter.export(&report.document, &title) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(error = %e, company = %record.company_name, "Failed to export PDF");
            return error_response(&AppError::from(e));
        }
    };

    info!(
        company = %record.company_name,
        fiscal_year = %record.fiscal_year,
        mode = ?report.mode,
        bytes = bytes.len(),
        "Annual report PDF generated"
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", pdf_filename(&record)),
            ),
        ],
        bytes,
    )
        .into_response()
}
