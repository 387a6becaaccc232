//! Annual report generation service.

use super::assembler::DocumentAssembler;
use super::derivation::{DerivationEngine, DerivedFigures};
use super::document::DocumentText;
use super::record::{DerivationMode, FinancialRecord};

/// Output of a single report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnualReport {
    /// Mode the record was derived in.
    pub mode: DerivationMode,
    /// Derived figures.
    pub figures: DerivedFigures,
    /// Rendered document.
    pub document: DocumentText,
}

/// Derives the figures for `record`, then assembles and renders the document.
#[must_use]
pub fn render_annual_report(
    engine: &DerivationEngine,
    assembler: &DocumentAssembler,
    record: &FinancialRecord,
) -> AnnualReport {
    let figures = engine.derive(record);
    let document = assembler.assemble(record, &figures).render();

    AnnualReport {
        mode: record.mode(),
        figures,
        document,
    }
}
