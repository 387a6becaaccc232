//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision and only
//! rounds when it is displayed.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Represents a monetary amount with currency.
///
/// `Display` renders the currency marker, comma thousands separators and
/// exactly two decimals, e.g. `€ 1,336.50`. Rounding is half-to-even and
/// never touches the stored amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    /// The unrounded amount.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the report renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro
    Eur,
    /// US Dollar
    Usd,
    /// Pound Sterling
    Gbp,
}

impl Currency {
    /// Marker printed in front of amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Usd => "$",
            Self::Gbp => "£",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

/// Formats an amount with comma thousands separators and two decimals.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-{grouped}.{frac_part}")
    } else {
        format!("{grouped}.{frac_part}")
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency.symbol(), format_amount(self.amount))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eur => write!(f, "EUR"),
            Self::Usd => write!(f, "USD"),
            Self::Gbp => write!(f, "GBP"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_new() {
        let amount = dec!(100.00);
        let money = Money::new(amount, Currency::Eur);
        assert_eq!(money.amount, amount);
        assert_eq!(money.currency, Currency::Eur);
    }

    #[test]
    fn test_money_display_negative() {
        assert_eq!(Money::new(dec!(-50), Currency::Eur).to_string(), "€ -50.00");
        assert_eq!(Money::new(dec!(-0.001), Currency::Gbp).to_string(), "£ 0.00");
    }

    #[rstest]
    #[case(dec!(0), "0.00")]
    #[case(dec!(5), "5.00")]
    #[case(dec!(999.999), "1,000.00")]
    #[case(dec!(1336.5), "1,336.50")]
    #[case(dec!(313.50), "313.50")]
    #[case(dec!(1234567.891), "1,234,567.89")]
    #[case(dec!(-50), "-50.00")]
    #[case(dec!(-1234.5), "-1,234.50")]
    #[case(dec!(-0.001), "0.00")]
    #[case(dec!(0.125), "0.12")]
    #[case(dec!(0.135), "0.14")]
    fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn test_money_display_keeps_amount_unrounded() {
        let money = Money::new(dec!(2536.505), Currency::Eur);
        assert_eq!(money.to_string(), "€ 2,536.50");
        assert_eq!(money.amount, dec!(2536.505));
    }

    #[test]
    fn test_money_display_other_currencies() {
        assert_eq!(Money::new(dec!(1000), Currency::Usd).to_string(), "$ 1,000.00");
        assert_eq!(Money::new(dec!(-7.1), Currency::Gbp).to_string(), "£ -7.10");
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Gbp.to_string(), "GBP");
    }
}
