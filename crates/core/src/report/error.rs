//! Report error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while turning a request into a financial record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A field required by the selected mode was not supplied.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A text field was supplied but blank.
    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),

    /// A field was supplied that the selected mode derives or aliases.
    #[error("Conflicting field {field}: {reason}")]
    ConflictingField {
        /// Offending field.
        field: &'static str,
        /// Why it conflicts.
        reason: &'static str,
    },

    /// A text field contains line breaks or other control characters.
    #[error("Field must not contain control characters: {0}")]
    ControlCharacter(&'static str),

    /// An amount is larger in magnitude than the engine accepts.
    #[error("Amount out of range for {field}: magnitude must not exceed {max}")]
    AmountOutOfRange {
        /// Offending field.
        field: &'static str,
        /// Largest accepted magnitude.
        max: Decimal,
    },

    /// Tax rate outside the accepted percentage range.
    #[error("Tax rate must be a percentage between 0 and 100, got {0}")]
    TaxRateOutOfRange(Decimal),
}

impl From<ReportError> for jaarrekening_shared::AppError {
    fn from(err: ReportError) -> Self {
        Self::Validation(err.to_string())
    }
}
