//! Bank file inspection service.

use std::io::Cursor;

use calamine::{Reader, open_workbook_auto_from_rs};
use csv::ReaderBuilder;

use super::error::IngestError;
use super::types::{FileFormat, TabularSummary};

/// Stateless inspector for uploaded bank files.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankFileIngestor;

impl BankFileIngestor {
    /// Creates the ingestor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Reads the header and counts the data rows of an uploaded file.
    pub fn inspect(&self, filename: &str, bytes: &[u8]) -> Result<TabularSummary, IngestError> {
        let format = FileFormat::from_filename(filename)
            .ok_or_else(|| IngestError::UnsupportedFormat(filename.to_string()))?;

        let (column_names, rows) = match format {
            FileFormat::Csv => Self::inspect_csv(bytes)?,
            FileFormat::Spreadsheet => Self::inspect_spreadsheet(bytes)?,
        };

        Ok(TabularSummary {
            filename: filename.to_string(),
            format,
            rows,
            columns: column_names.len(),
            column_names,
        })
    }

    /// Semicolon wins when the header line has more semicolons than commas.
    fn sniff_delimiter(bytes: &[u8]) -> u8 {
        let header = bytes.split(|b| *b == b'\n').next().unwrap_or_default();
        let semicolons = header.iter().filter(|b| **b == b';').count();
        let commas = header.iter().filter(|b| **b == b',').count();
        if semicolons > commas { b';' } else { b',' }
    }

    fn inspect_csv(bytes: &[u8]) -> Result<(Vec<String>, usize), IngestError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(Self::sniff_delimiter(bytes))
            .flexible(true)
            .from_reader(bytes);

        let column_names: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if column_names.is_empty() {
            return Err(IngestError::Empty);
        }

        let mut rows = 0;
        for record in reader.records() {
            record?;
            rows += 1;
        }

        Ok((column_names, rows))
    }

    fn inspect_spreadsheet(bytes: &[u8]) -> Result<(Vec<String>, usize), IngestError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| IngestError::Spreadsheet(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(IngestError::Empty)?
            .map_err(|e| IngestError::Spreadsheet(e.to_string()))?;

        let mut rows = range.rows();
        let header = rows.next().ok_or(IngestError::Empty)?;
        let column_names = header.iter().map(|cell| cell.to_string().trim().to_string()).collect();

        Ok((column_names, rows.count()))
    }
}
