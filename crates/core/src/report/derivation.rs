//! Derivation of report figures from a financial record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::record::{FinancialRecord, ProfitAndLoss, RollUpProfitAndLoss};

/// Fixed rate for the indicative corporate tax estimate, in percent.
pub const INDICATIVE_TAX_RATE: Decimal = Decimal::from_parts(19, 0, 0, false, 0);

/// Figures computed from a record. Values are never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFigures {
    /// Fixed plus current assets.
    pub total_assets: Decimal,
    /// Long-term plus short-term liabilities.
    pub total_liabilities: Decimal,
    /// Revenue minus cost of sales.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_profit: Option<Decimal>,
    /// Gross profit less costs plus financial result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_before_tax: Option<Decimal>,
    /// Corporate tax on the pre-tax profit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    /// Pre-tax profit minus tax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_profit: Option<Decimal>,
    /// Opening equity plus net profit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equity_end: Option<Decimal>,
}

impl DerivedFigures {
    /// Iterates over the figures that were computed, in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Decimal)> {
        [
            ("total_assets", Some(self.total_assets)),
            ("total_liabilities", Some(self.total_liabilities)),
            ("gross_profit", self.gross_profit),
            ("profit_before_tax", self.profit_before_tax),
            ("tax", self.tax),
            ("net_profit", self.net_profit),
            ("equity_end", self.equity_end),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

/// Indicative corporate tax on a supplied pre-tax profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicativeTax {
    /// Pre-tax profit as supplied.
    pub profit_before_tax: Decimal,
    /// Rate applied, in percent.
    pub rate: Decimal,
    /// Tax amount.
    pub tax: Decimal,
    /// Profit after the indicative tax.
    pub profit_after_tax: Decimal,
}

/// Stateless engine computing derived figures.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivationEngine;

impl DerivationEngine {
    /// Creates the engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Derives every figure the record's mode supports.
    #[must_use]
    pub fn derive(&self, record: &FinancialRecord) -> DerivedFigures {
        let bs = &record.balance_sheet;
        let mut figures = DerivedFigures {
            total_assets: bs.fixed_assets + bs.current_assets,
            total_liabilities: bs.long_term_liabilities + bs.short_term_liabilities,
            gross_profit: None,
            profit_before_tax: None,
            tax: None,
            net_profit: None,
            equity_end: None,
        };

        if let ProfitAndLoss::RollUp(pl) = &record.profit_and_loss {
            Self::roll_up(pl, bs.equity, &mut figures);
        }

        figures
    }

    /// Each step only reads inputs or figures computed before it.
    fn roll_up(pl: &RollUpProfitAndLoss, equity_start: Decimal, figures: &mut DerivedFigures) {
        let gross_profit = pl.revenue - pl.cost_of_sales;
        let profit_before_tax =
            gross_profit - pl.operating_expenses - pl.personnel_costs + pl.financial_result;
        let tax = profit_before_tax * pl.tax_rate / Decimal::ONE_HUNDRED;
        let net_profit = profit_before_tax - tax;

        figures.gross_profit = Some(gross_profit);
        figures.profit_before_tax = Some(profit_before_tax);
        figures.tax = Some(tax);
        figures.net_profit = Some(net_profit);
        figures.equity_end = Some(equity_start + net_profit);
    }

    /// Indicative corporate tax at the fixed 19% rate.
    ///
    /// `profit_before_tax` must already satisfy [`check_amount`](super::record::check_amount).
    #[must_use]
    pub fn indicative_corporate_tax(&self, profit_before_tax: Decimal) -> IndicativeTax {
        let tax = profit_before_tax * INDICATIVE_TAX_RATE / Decimal::ONE_HUNDRED;
        IndicativeTax {
            profit_before_tax,
            rate: INDICATIVE_TAX_RATE,
            tax,
            profit_after_tax: profit_before_tax - tax,
        }
    }
}
