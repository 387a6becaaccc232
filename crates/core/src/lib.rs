//! Core report logic for Jaarrekening.
//!
//! This crate contains pure domain logic with ZERO web dependencies.
//! Validation, figure derivation, document assembly and file handling
//! all live here.
//!
//! # Modules
//!
//! - `report` - Financial record, derivation engine and document assembly
//! - `export` - PDF rendering of assembled documents
//! - `ingest` - Shape inspection of uploaded bank files

pub mod export;
pub mod ingest;
pub mod report;
