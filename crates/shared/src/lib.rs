//! Shared types, errors, and configuration for Jaarrekening.
//!
//! This crate provides common types used across all other crates:
//! - Money display type with the report's number formatting
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ExportConfig, ReportConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use types::{Currency, Money};
