//! Ingestion data types.

use serde::Serialize;

/// Recognised tabular formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Comma separated values.
    Csv,
    /// Excel or OpenDocument workbook.
    Spreadsheet,
}

impl FileFormat {
    /// Detects the format from a file name's extension.
    #[must_use]
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Spreadsheet),
            _ => None,
        }
    }
}

/// Shape of an uploaded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabularSummary {
    /// Original file name.
    pub filename: String,
    /// Detected format.
    pub format: FileFormat,
    /// Data rows, header excluded.
    pub rows: usize,
    /// Number of header columns.
    pub columns: usize,
    /// Header names in order.
    pub column_names: Vec<String>,
}
