//! Financial record: the wire schema and its validated, typed form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReportError;

/// Annual report request as received from a caller.
///
/// The canonical schema is the roll-up superset. Older clients sending the
/// simple variant (`net_profit` supplied, no `cost_of_sales`) or the `equity`
/// field name are still accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualReportRequest {
    /// Company name.
    pub company_name: String,
    /// Fiscal year label, display only.
    pub fiscal_year: String,
    /// Balance sheet figures.
    pub balance_sheet: BalanceSheetInput,
    /// Profit and loss figures.
    pub profit_and_loss: ProfitAndLossInput,
}

/// Balance sheet part of the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheetInput {
    /// Fixed (non-current) assets.
    pub fixed_assets: Decimal,
    /// Current assets.
    pub current_assets: Decimal,
    /// Deprecated name for `equity_start`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equity: Option<Decimal>,
    /// Equity at the start of the fiscal year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equity_start: Option<Decimal>,
    /// Long-term liabilities.
    pub long_term_liabilities: Decimal,
    /// Short-term liabilities.
    pub short_term_liabilities: Decimal,
}

/// Profit and loss part of the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfitAndLossInput {
    /// Revenue.
    pub revenue: Decimal,
    /// Cost of sales. Its presence selects roll-up mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_of_sales: Option<Decimal>,
    /// Operating expenses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_expenses: Option<Decimal>,
    /// Personnel costs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personnel_costs: Option<Decimal>,
    /// Financial income minus financial expenses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_result: Option<Decimal>,
    /// Corporate tax rate as a percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
    /// Net result, supplied directly in simple mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_profit: Option<Decimal>,
}

/// Validated financial record. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialRecord {
    /// Company name, never blank.
    pub company_name: String,
    /// Fiscal year label.
    pub fiscal_year: String,
    /// Balance sheet figures.
    pub balance_sheet: BalanceSheet,
    /// Profit and loss figures in the mode the caller selected.
    pub profit_and_loss: ProfitAndLoss,
}

/// Balance sheet figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSheet {
    /// Fixed assets.
    pub fixed_assets: Decimal,
    /// Current assets.
    pub current_assets: Decimal,
    /// Opening equity in roll-up mode, reported equity in simple mode.
    pub equity: Decimal,
    /// Long-term liabilities.
    pub long_term_liabilities: Decimal,
    /// Short-term liabilities.
    pub short_term_liabilities: Decimal,
}

/// Profit and loss figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitAndLoss {
    /// Net result supplied by the caller.
    Simple(SimpleProfitAndLoss),
    /// Every cost line supplied; results are derived.
    RollUp(RollUpProfitAndLoss),
}

/// Simple-mode figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleProfitAndLoss {
    /// Revenue.
    pub revenue: Decimal,
    /// Net result as supplied.
    pub net_profit: Decimal,
}

/// Roll-up mode figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollUpProfitAndLoss {
    /// Revenue.
    pub revenue: Decimal,
    /// Cost of sales.
    pub cost_of_sales: Decimal,
    /// Operating expenses.
    pub operating_expenses: Decimal,
    /// Personnel costs.
    pub personnel_costs: Decimal,
    /// Financial result.
    pub financial_result: Decimal,
    /// Tax rate as a percentage in `[0, 100]`.
    pub tax_rate: Decimal,
}

/// Which derivation a record goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivationMode {
    /// Net profit supplied directly.
    Simple,
    /// Full roll-up from revenue to equity.
    RollUp,
}

impl ProfitAndLoss {
    /// Revenue, present in both modes.
    #[must_use]
    pub const fn revenue(&self) -> Decimal {
        match self {
            Self::Simple(p) => p.revenue,
            Self::RollUp(p) => p.revenue,
        }
    }
}

impl FinancialRecord {
    /// Mode selected by the supplied profit and loss fields.
    #[must_use]
    pub const fn mode(&self) -> DerivationMode {
        match self.profit_and_loss {
            ProfitAndLoss::Simple(_) => DerivationMode::Simple,
            ProfitAndLoss::RollUp(_) => DerivationMode::RollUp,
        }
    }
}

/// Largest accepted magnitude for any amount, 10^15.
///
/// Sums and the tax product of amounts within this bound stay far inside
/// `Decimal` range, so derivation never overflows.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Rejects amounts whose magnitude exceeds [`MAX_AMOUNT`].
pub fn check_amount(field: &'static str, value: Decimal) -> Result<Decimal, ReportError> {
    if value.abs() > MAX_AMOUNT {
        return Err(ReportError::AmountOutOfRange {
            field,
            max: MAX_AMOUNT,
        });
    }
    Ok(value)
}

fn required(value: Option<Decimal>, field: &'static str) -> Result<Decimal, ReportError> {
    let value = value.ok_or(ReportError::MissingField(field))?;
    check_amount(field, value)
}

fn plain_text(field: &'static str, value: &str) -> Result<(), ReportError> {
    if value.chars().any(char::is_control) {
        return Err(ReportError::ControlCharacter(field));
    }
    Ok(())
}

impl TryFrom<BalanceSheetInput> for BalanceSheet {
    type Error = ReportError;

    fn try_from(input: BalanceSheetInput) -> Result<Self, Self::Error> {
        let (equity_field, equity) = match (input.equity_start, input.equity) {
            (Some(_), Some(_)) => {
                return Err(ReportError::ConflictingField {
                    field: "equity",
                    reason: "deprecated alias of equity_start, supply only one",
                });
            }
            (Some(value), None) => ("equity_start", value),
            (None, Some(value)) => ("equity", value),
            (None, None) => return Err(ReportError::MissingField("equity_start")),
        };

        Ok(Self {
            fixed_assets: check_amount("fixed_assets", input.fixed_assets)?,
            current_assets: check_amount("current_assets", input.current_assets)?,
            equity: check_amount(equity_field, equity)?,
            long_term_liabilities: check_amount(
                "long_term_liabilities",
                input.long_term_liabilities,
            )?,
            short_term_liabilities: check_amount(
                "short_term_liabilities",
                input.short_term_liabilities,
            )?,
        })
    }
}

impl TryFrom<ProfitAndLossInput> for ProfitAndLoss {
    type Error = ReportError;

    fn try_from(input: ProfitAndLossInput) -> Result<Self, Self::Error> {
        let revenue = check_amount("revenue", input.revenue)?;
        let Some(cost_of_sales) = input.cost_of_sales else {
            let net_profit = required(input.net_profit, "net_profit")?;
            return Ok(Self::Simple(SimpleProfitAndLoss {
                revenue,
                net_profit,
            }));
        };

        if input.net_profit.is_some() {
            return Err(ReportError::ConflictingField {
                field: "net_profit",
                reason: "derived when cost_of_sales is supplied",
            });
        }

        let tax_rate = input.tax_rate.ok_or(ReportError::MissingField("tax_rate"))?;
        if tax_rate < Decimal::ZERO || tax_rate > Decimal::ONE_HUNDRED {
            return Err(ReportError::TaxRateOutOfRange(tax_rate));
        }

        Ok(Self::RollUp(RollUpProfitAndLoss {
            revenue,
            cost_of_sales: check_amount("cost_of_sales", cost_of_sales)?,
            operating_expenses: required(input.operating_expenses, "operating_expenses")?,
            personnel_costs: required(input.personnel_costs, "personnel_costs")?,
            financial_result: required(input.financial_result, "financial_result")?,
            tax_rate,
        }))
    }
}

impl TryFrom<AnnualReportRequest> for FinancialRecord {
    type Error = ReportError;

    fn try_from(request: AnnualReportRequest) -> Result<Self, Self::Error> {
        let company_name = request.company_name.trim();
        if company_name.is_empty() {
            return Err(ReportError::EmptyField("company_name"));
        }
        plain_text("company_name", company_name)?;
        plain_text("fiscal_year", &request.fiscal_year)?;

        Ok(Self {
            company_name: company_name.to_string(),
            fiscal_year: request.fiscal_year,
            balance_sheet: request.balance_sheet.try_into()?,
            profit_and_loss: request.profit_and_loss.try_into()?,
        })
    }
}
