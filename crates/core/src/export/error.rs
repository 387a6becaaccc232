//! Export error types.

use thiserror::Error;

/// Errors that can occur while exporting a document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The PDF backend rejected the document.
    #[error("PDF rendering failed: {0}")]
    Pdf(String),
}

impl From<ExportError> for jaarrekening_shared::AppError {
    fn from(err: ExportError) -> Self {
        Self::Internal(err.to_string())
    }
}
