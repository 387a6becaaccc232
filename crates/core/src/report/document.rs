//! Typed report sections and their text rendering.
//!
//! A document is a fixed sequence of sections. Each section is a list of
//! typed lines, and only [`ReportSections::render`] turns them into text, so
//! layout rules live in one place.

use jaarrekening_shared::Money;
use serde::Serialize;

/// Width of separator rules.
pub const RULE_WIDTH: usize = 60;

/// Column at which amounts start.
pub const LABEL_WIDTH: usize = 40;

/// Placeholder for figures the derivation mode does not produce.
pub const NOT_APPLICABLE: &str = "n.v.t.";

/// Stable identifier of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionAnchor {
    /// Title page with company identity.
    Cover,
    /// Assets, equity and liabilities.
    BalanceSheet,
    /// Revenue down to net result.
    ProfitAndLoss,
    /// Valuation principles.
    AccountingPolicies,
    /// Equity and liabilities restated, equity movement.
    BalanceSheetNotes,
    /// Remaining disclosures.
    OtherDisclosures,
    /// Blank lines for place, date and signatories.
    Signature,
}

impl SectionAnchor {
    /// Every anchor in document order.
    pub const ALL: [Self; 7] = [
        Self::Cover,
        Self::BalanceSheet,
        Self::ProfitAndLoss,
        Self::AccountingPolicies,
        Self::BalanceSheetNotes,
        Self::OtherDisclosures,
        Self::Signature,
    ];
}

/// One line of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Full width `=` rule.
    HeavyRule,
    /// Full width `-` rule.
    LightRule,
    /// Sub-heading, printed as is.
    Heading(String),
    /// Label with an amount in the amount column.
    Amount {
        /// Left-hand label.
        label: String,
        /// Amount, or `None` when not applicable in this mode.
        value: Option<Money>,
    },
    /// Free text.
    Text(String),
    /// Label followed by a line to fill in by hand.
    FillIn(String),
    /// Empty line.
    Blank,
}

impl Line {
    /// Amount line.
    pub fn amount(label: impl Into<String>, value: Money) -> Self {
        Self::Amount {
            label: label.into(),
            value: Some(value),
        }
    }

    /// Amount line that may be absent.
    pub fn optional_amount(label: impl Into<String>, value: Option<Money>) -> Self {
        Self::Amount {
            label: label.into(),
            value,
        }
    }

    /// Free text line.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Heading line.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(text.into())
    }

    fn render(&self, out: &mut String) {
        match self {
            Self::HeavyRule => out.push_str(&"=".repeat(RULE_WIDTH)),
            Self::LightRule => out.push_str(&"-".repeat(RULE_WIDTH)),
            Self::Heading(text) | Self::Text(text) => out.push_str(text),
            Self::Amount { label, value } => {
                let amount = value.map_or_else(|| NOT_APPLICABLE.to_string(), |m| m.to_string());
                out.push_str(&format!("{label:<LABEL_WIDTH$}{amount}"));
            }
            Self::FillIn(label) => {
                out.push_str(&format!("{label:<LABEL_WIDTH$}{}", "_".repeat(RULE_WIDTH - LABEL_WIDTH)));
            }
            Self::Blank => {}
        }
    }
}

/// A titled block of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Stable anchor.
    pub anchor: SectionAnchor,
    /// Title line, `None` for the cover.
    pub title: Option<String>,
    /// Body lines.
    pub lines: Vec<Line>,
}

impl Section {
    fn render(&self, out: &mut String) {
        if let Some(title) = &self.title {
            out.push_str(title);
            out.push('\n');
            Line::LightRule.render(out);
            out.push('\n');
            Line::Blank.render(out);
            out.push('\n');
        }
        for line in &self.lines {
            line.render(out);
            out.push('\n');
        }
    }
}

/// Every section of an annual report, one field per section.
///
/// Field order is document order; there is no way to build a report with a
/// section missing or moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSections {
    /// Title page.
    pub cover: Section,
    /// Balance sheet.
    pub balance_sheet: Section,
    /// Profit and loss statement.
    pub profit_and_loss: Section,
    /// Accounting policies.
    pub accounting_policies: Section,
    /// Notes to the balance sheet.
    pub balance_sheet_notes: Section,
    /// Other disclosures.
    pub other_disclosures: Section,
    /// Signature block.
    pub signature: Section,
}

impl ReportSections {
    /// Sections in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        [
            &self.cover,
            &self.balance_sheet,
            &self.profit_and_loss,
            &self.accounting_policies,
            &self.balance_sheet_notes,
            &self.other_disclosures,
            &self.signature,
        ]
        .into_iter()
    }

    /// Renders the sections as one newline-delimited text block.
    #[must_use]
    pub fn render(&self) -> DocumentText {
        let mut out = String::new();
        let mut anchors = Vec::with_capacity(SectionAnchor::ALL.len());

        for (i, section) in self.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            let line = out.matches('\n').count();
            anchors.push((section.anchor, line));
            section.render(&mut out);
        }

        out.push('\n');
        Line::HeavyRule.render(&mut out);
        out.push_str("\nEinde Jaarrekening\n");
        Line::HeavyRule.render(&mut out);

        DocumentText { text: out, anchors }
    }
}

/// Rendered annual report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText {
    text: String,
    anchors: Vec<(SectionAnchor, usize)>,
}

impl DocumentText {
    /// Lines in order, for page-by-page rendering.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }

    /// Each section's anchor with the zero-based line it starts on.
    #[must_use]
    pub fn section_anchors(&self) -> &[(SectionAnchor, usize)] {
        &self.anchors
    }

    /// Consumes the document, returning the text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}
