//! Fixed-width PDF rendering of report text.
//!
//! Every text line becomes one PDF line in a monospace font, so the column
//! layout of the text document carries over unchanged.
#![allow(clippy::float_arithmetic)]

use jaarrekening_shared::ExportConfig;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use super::error::ExportError;
use crate::report::DocumentText;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 18.0;
const MARGIN_TOP_MM: f32 = 20.0;
const FOOTER_Y_MM: f32 = 10.0;
const POINT_IN_MM: f32 = 0.3528;
const LINE_SPACING: f32 = 1.2;
const LAYER_NAME: &str = "Tekst";

/// Splits a document into pages of at most `lines_per_page` lines.
///
/// Content and order are untouched; a zero page size is treated as one.
#[must_use]
pub fn paginate(document: &DocumentText, lines_per_page: usize) -> Vec<Vec<&str>> {
    let lines: Vec<&str> = document.lines().collect();
    if lines.is_empty() {
        return vec![Vec::new()];
    }
    lines
        .chunks(lines_per_page.max(1))
        .map(<[&str]>::to_vec)
        .collect()
}

/// Renders documents as A4 PDFs in memory.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    config: ExportConfig,
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}

impl PdfExporter {
    /// Creates an exporter with the given layout settings.
    #[must_use]
    pub const fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    fn line_height_mm(&self) -> f32 {
        self.config.font_size * LINE_SPACING * POINT_IN_MM
    }

    /// Renders `document` into PDF bytes.
    pub fn export(&self, document: &DocumentText, title: &str) -> Result<Vec<u8>, ExportError> {
        let pages = paginate(document, self.config.lines_per_page);
        let page_count = pages.len();

        let (doc, first_page, first_layer) = PdfDocument::new(
            title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            LAYER_NAME,
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Courier)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        for (index, lines) in pages.iter().enumerate() {
            let (page, layer) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME)
            };
            let layer = doc.get_page(page).get_layer(layer);

            self.write_lines(&layer, &font, lines);
            layer.use_text(
                format!("Pagina {} van {page_count}", index + 1),
                self.config.font_size,
                Mm(MARGIN_LEFT_MM),
                Mm(FOOTER_Y_MM),
                &font,
            );
        }

        doc.save_to_bytes()
            .map_err(|e| ExportError::Pdf(e.to_string()))
    }

    fn write_lines(&self, layer: &PdfLayerReference, font: &IndirectFontRef, lines: &[&str]) {
        let line_height = self.line_height_mm();
        let mut y = PAGE_HEIGHT_MM - MARGIN_TOP_MM;

        for line in lines {
            if !line.is_empty() {
                layer.use_text(*line, self.config.font_size, Mm(MARGIN_LEFT_MM), Mm(y), font);
            }
            y -= line_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{
        AnnualReportRequest, BalanceSheetInput, DerivationEngine, DocumentAssembler,
        FinancialRecord, ProfitAndLossInput, render_annual_report,
    };
    use rust_decimal_macros::dec;

    fn document() -> DocumentText {
        let record = FinancialRecord::try_from(AnnualReportRequest {
            company_name: "Export B.V.".to_string(),
            fiscal_year: "2024".to_string(),
            balance_sheet: BalanceSheetInput {
                fixed_assets: dec!(1000),
                current_assets: dec!(500),
                equity: None,
                equity_start: Some(dec!(1200)),
                long_term_liabilities: dec!(200),
                short_term_liabilities: dec!(100),
            },
            profit_and_loss: ProfitAndLossInput {
                revenue: dec!(5000),
                net_profit: Some(dec!(750)),
                ..ProfitAndLossInput::default()
            },
        })
        .unwrap();

        render_annual_report(
            &DerivationEngine::new(),
            &DocumentAssembler::default(),
            &record,
        )
        .document
    }

    #[test]
    fn test_paginate_keeps_every_line_in_order() {
        let doc = document();
        let pages = paginate(&doc, 10);

        let flattened: Vec<&str> = pages.iter().flatten().copied().collect();
        let original: Vec<&str> = doc.lines().collect();
        assert_eq!(flattened, original);
        assert!(pages.iter().all(|p| p.len() <= 10));
        assert_eq!(pages.len(), original.len().div_ceil(10));
    }

    #[test]
    fn test_paginate_zero_page_size() {
        let doc = document();
        let pages = paginate(&doc, 0);
        assert_eq!(pages.len(), doc.lines().count());
    }

    #[test]
    fn test_export_produces_pdf() {
        let bytes = PdfExporter::default()
            .export(&document(), "Jaarrekening Export B.V. 2024")
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_multiple_pages() {
        let exporter = PdfExporter::new(ExportConfig {
            lines_per_page: 20,
            font_size: 9.0,
        });
        let bytes = exporter.export(&document(), "Meerdere pagina's").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
