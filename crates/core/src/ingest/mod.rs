//! Bank file ingestion.
//!
//! Inspects uploaded tabular files (CSV or spreadsheet) and reports their
//! shape. Contents are not interpreted.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::IngestError;
pub use service::BankFileIngestor;
pub use types::{FileFormat, TabularSummary};
