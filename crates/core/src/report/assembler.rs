//! Builds the typed report sections from a record and its derived figures.

use jaarrekening_shared::{Currency, Money};
use rust_decimal::Decimal;

use super::derivation::DerivedFigures;
use super::document::{Line, ReportSections, Section, SectionAnchor};
use super::record::{FinancialRecord, ProfitAndLoss};

const ACCOUNTING_POLICIES: &[&str] = &[
    "Algemeen",
    "De jaarrekening is opgesteld conform de in Nederland algemeen",
    "aanvaarde grondslagen voor financiële verslaggeving.",
    "",
    "Waarderingsgrondslagen",
    "- Activa worden gewaardeerd tegen verkrijgingsprijs.",
    "- Schulden worden opgenomen tegen nominale waarde.",
    "- Resultaten worden toegerekend aan het boekjaar waarop",
    "  zij betrekking hebben.",
    "",
    "Continuïteit",
    "De jaarrekening is opgesteld uitgaande van continuïteit",
    "van de onderneming.",
];

const OTHER_DISCLOSURES: &[&str] = &[
    "Gebeurtenissen na balansdatum",
    "Er hebben zich na balansdatum geen gebeurtenissen",
    "voorgedaan die het beeld van de jaarrekening wijzigen.",
    "",
    "Resultaatbestemming",
    "Het resultaat over het boekjaar wordt toegevoegd aan",
    "het eigen vermogen.",
    "",
    "Niet in de balans opgenomen verplichtingen",
    "Er zijn geen niet in de balans opgenomen verplichtingen.",
];

/// Result and equity figures as they appear in the document, whichever
/// mode produced them. A figure missing from `DerivedFigures` stays `None`
/// and prints as not applicable rather than as zero.
struct Presented {
    cost_of_sales: Option<Decimal>,
    gross_profit: Option<Decimal>,
    operating_expenses: Option<Decimal>,
    personnel_costs: Option<Decimal>,
    financial_result: Option<Decimal>,
    profit_before_tax: Option<Decimal>,
    tax: Option<Decimal>,
    net_profit: Option<Decimal>,
    equity_start: Option<Decimal>,
    equity_end: Option<Decimal>,
}

impl Presented {
    fn new(record: &FinancialRecord, figures: &DerivedFigures) -> Self {
        let equity = record.balance_sheet.equity;
        match &record.profit_and_loss {
            ProfitAndLoss::Simple(pl) => Self {
                cost_of_sales: None,
                gross_profit: None,
                // Everything between revenue and the supplied result.
                operating_expenses: Some(pl.revenue - pl.net_profit),
                personnel_costs: None,
                financial_result: None,
                profit_before_tax: None,
                tax: None,
                net_profit: Some(pl.net_profit),
                equity_start: None,
                equity_end: Some(equity),
            },
            ProfitAndLoss::RollUp(pl) => Self {
                cost_of_sales: Some(pl.cost_of_sales),
                gross_profit: figures.gross_profit,
                operating_expenses: Some(pl.operating_expenses),
                personnel_costs: Some(pl.personnel_costs),
                financial_result: Some(pl.financial_result),
                profit_before_tax: figures.profit_before_tax,
                tax: figures.tax,
                net_profit: figures.net_profit,
                equity_start: Some(equity),
                equity_end: figures.equity_end,
            },
        }
    }
}

/// Turns a record and its derived figures into report sections.
#[derive(Debug, Clone, Copy)]
pub struct DocumentAssembler {
    currency: Currency,
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new(Currency::Eur)
    }
}

impl DocumentAssembler {
    /// Creates an assembler printing amounts in `currency`.
    #[must_use]
    pub const fn new(currency: Currency) -> Self {
        Self { currency }
    }

    fn money(&self, amount: Decimal) -> Money {
        Money::new(amount, self.currency)
    }

    fn opt(&self, amount: Option<Decimal>) -> Option<Money> {
        amount.map(|a| self.money(a))
    }

    /// Assembles every section. Deterministic for equal inputs.
    #[must_use]
    pub fn assemble(&self, record: &FinancialRecord, figures: &DerivedFigures) -> ReportSections {
        let presented = Presented::new(record, figures);

        ReportSections {
            cover: Self::cover(record),
            balance_sheet: self.balance_sheet(record, figures, &presented),
            profit_and_loss: self.profit_and_loss(record, &presented),
            accounting_policies: static_section(
                SectionAnchor::AccountingPolicies,
                "3. GRONDSLAGEN VOOR WAARDERING EN RESULTAATBEPALING",
                ACCOUNTING_POLICIES,
            ),
            balance_sheet_notes: self.balance_sheet_notes(record, figures, &presented),
            other_disclosures: static_section(
                SectionAnchor::OtherDisclosures,
                "5. OVERIGE TOELICHTINGEN",
                OTHER_DISCLOSURES,
            ),
            signature: Self::signature(record),
        }
    }

    fn cover(record: &FinancialRecord) -> Section {
        Section {
            anchor: SectionAnchor::Cover,
            title: None,
            lines: vec![
                Line::HeavyRule,
                Line::text(format!("{:^60}", "JAARREKENING").trim_end().to_string()),
                Line::HeavyRule,
                Line::Blank,
                Line::text(format!("Onderneming:     {}", record.company_name)),
                Line::text(format!("Boekjaar:        {}", record.fiscal_year)),
                Line::Blank,
                Line::text("Opgesteld voor interne rapportagedoeleinden"),
                Line::HeavyRule,
            ],
        }
    }

    fn balance_sheet(
        &self,
        record: &FinancialRecord,
        figures: &DerivedFigures,
        presented: &Presented,
    ) -> Section {
        let bs = &record.balance_sheet;
        Section {
            anchor: SectionAnchor::BalanceSheet,
            title: Some(format!("1. BALANS PER 31 DECEMBER {}", record.fiscal_year)),
            lines: vec![
                Line::heading("ACTIVA"),
                Line::Blank,
                Line::heading("Vaste activa"),
                Line::amount("  Materiële vaste activa", self.money(bs.fixed_assets)),
                Line::Blank,
                Line::heading("Vlottende activa"),
                Line::amount(
                    "  Vorderingen en liquide middelen",
                    self.money(bs.current_assets),
                ),
                Line::Blank,
                Line::LightRule,
                Line::amount("TOTAAL ACTIVA", self.money(figures.total_assets)),
                Line::Blank,
                Line::Blank,
                Line::heading("PASSIVA"),
                Line::Blank,
                Line::heading("Eigen vermogen"),
                Line::optional_amount("  Eigen vermogen", self.opt(presented.equity_end)),
                Line::Blank,
                Line::heading("Langlopende schulden"),
                Line::amount("  Leningen", self.money(bs.long_term_liabilities)),
                Line::Blank,
                Line::heading("Kortlopende schulden"),
                Line::amount(
                    "  Crediteuren en overlopende posten",
                    self.money(bs.short_term_liabilities),
                ),
                Line::Blank,
                Line::LightRule,
                Line::optional_amount(
                    "TOTAAL PASSIVA",
                    self.opt(
                        presented
                            .equity_end
                            .map(|equity| equity + figures.total_liabilities),
                    ),
                ),
            ],
        }
    }

    fn profit_and_loss(&self, record: &FinancialRecord, presented: &Presented) -> Section {
        Section {
            anchor: SectionAnchor::ProfitAndLoss,
            title: Some(format!("2. WINST- EN VERLIESREKENING {}", record.fiscal_year)),
            lines: vec![
                Line::amount("Netto-omzet", self.money(record.profit_and_loss.revenue())),
                Line::optional_amount("Kostprijs van de omzet", self.opt(presented.cost_of_sales)),
                Line::LightRule,
                Line::optional_amount("Brutowinst", self.opt(presented.gross_profit)),
                Line::Blank,
                Line::optional_amount("Bedrijfskosten", self.opt(presented.operating_expenses)),
                Line::optional_amount("Personeelskosten", self.opt(presented.personnel_costs)),
                Line::optional_amount(
                    "Financiële baten en lasten",
                    self.opt(presented.financial_result),
                ),
                Line::LightRule,
                Line::optional_amount(
                    "Resultaat vóór belasting",
                    self.opt(presented.profit_before_tax),
                ),
                Line::optional_amount("Vennootschapsbelasting", self.opt(presented.tax)),
                Line::LightRule,
                Line::optional_amount("Resultaat na belasting", self.opt(presented.net_profit)),
            ],
        }
    }

    fn balance_sheet_notes(
        &self,
        record: &FinancialRecord,
        figures: &DerivedFigures,
        presented: &Presented,
    ) -> Section {
        let bs = &record.balance_sheet;
        Section {
            anchor: SectionAnchor::BalanceSheetNotes,
            title: Some("4. TOELICHTING OP DE BALANS".to_string()),
            lines: vec![
                Line::heading("Mutatie eigen vermogen"),
                Line::optional_amount(
                    "  Eigen vermogen begin boekjaar",
                    self.opt(presented.equity_start),
                ),
                Line::optional_amount("  Resultaat boekjaar", self.opt(presented.net_profit)),
                Line::LightRule,
                Line::optional_amount(
                    "  Eigen vermogen einde boekjaar",
                    self.opt(presented.equity_end),
                ),
                Line::Blank,
                Line::heading("Langlopende schulden"),
                Line::amount("  Leningen", self.money(bs.long_term_liabilities)),
                Line::Blank,
                Line::heading("Kortlopende schulden"),
                Line::amount(
                    "  Crediteuren en overlopende posten",
                    self.money(bs.short_term_liabilities),
                ),
                Line::LightRule,
                Line::amount("  Totaal schulden", self.money(figures.total_liabilities)),
            ],
        }
    }

    fn signature(record: &FinancialRecord) -> Section {
        Section {
            anchor: SectionAnchor::Signature,
            title: Some("ONDERTEKENING".to_string()),
            lines: vec![
                Line::text("Aldus opgemaakt en vastgesteld door het bestuur van"),
                Line::text(format!("{}.", record.company_name)),
                Line::Blank,
                Line::FillIn("Plaats:".to_string()),
                Line::FillIn("Datum:".to_string()),
                Line::Blank,
                Line::FillIn("Naam bestuurder:".to_string()),
                Line::FillIn("Handtekening:".to_string()),
            ],
        }
    }
}

fn static_section(anchor: SectionAnchor, title: &str, text: &[&str]) -> Section {
    Section {
        anchor,
        title: Some(title.to_string()),
        lines: text
            .iter()
            .map(|t| if t.is_empty() { Line::Blank } else { Line::text(*t) })
            .collect(),
    }
}
