//! Annual report generation.
//!
//! This module provides pure logic for turning caller-supplied figures into
//! an annual report document:
//! - Financial record validation
//! - Figure derivation (simple and roll-up modes)
//! - Document assembly and text rendering

pub mod assembler;
pub mod derivation;
pub mod document;
pub mod error;
pub mod record;
pub mod service;


pub use assembler::DocumentAssembler;
pub use derivation::{DerivationEngine, DerivedFigures, INDICATIVE_TAX_RATE, IndicativeTax};
pub use document::{DocumentText, Line, ReportSections, Section, SectionAnchor};
pub use error::ReportError;
pub use record::{
    AnnualReportRequest, BalanceSheet, BalanceSheetInput, DerivationMode, FinancialRecord,
    MAX_AMOUNT, ProfitAndLoss, ProfitAndLossInput, RollUpProfitAndLoss, SimpleProfitAndLoss,
    check_amount,
};
pub use service::{AnnualReport, render_annual_report};
