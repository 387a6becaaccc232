//! Ingestion error types.

use thiserror::Error;

/// Errors that can occur while inspecting an uploaded file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File extension is not one of the supported formats.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// File has no header row.
    #[error("File contains no data")]
    Empty,

    /// CSV could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet could not be opened or read.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),
}

impl From<IngestError> for jaarrekening_shared::AppError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::UnsupportedFormat(_) => Self::UnsupportedMedia(err.to_string()),
            IngestError::Empty | IngestError::Csv(_) | IngestError::Spreadsheet(_) => {
                Self::Validation(err.to_string())
            }
        }
    }
}
