//! Money error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors produced by money construction, arithmetic, and encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Two values with different currency codes were compared or combined.
    #[error("currencies don't match: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency code of the receiver.
        left: String,
        /// Currency code of the other operand.
        right: String,
    },

    /// Neither the receiver nor any operand carries a currency.
    #[error("no currency found")]
    NoCurrency,

    /// Caller passed an argument outside the operation's domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Division by an exact zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Result does not fit the decimal range.
    #[error("decimal overflow")]
    Overflow,

    /// Numeric input could not be converted to an exact decimal.
    #[error("cannot convert {0} to a decimal amount")]
    Conversion(String),

    /// External representation is malformed.
    #[error("invalid money representation: {0}")]
    Decode(String),

    /// Value could not be written to an external representation.
    #[error("cannot encode money: {0}")]
    Encode(String),
}

impl MoneyError {
    /// Builds a mismatch error from two currency codes.
    #[must_use]
    pub fn mismatch(left: &str, right: &str) -> Self {
        Self::CurrencyMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::NoCurrency => "NO_CURRENCY",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow => "OVERFLOW",
            Self::Conversion(_) => "CONVERSION_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Encode(_) => "ENCODE_ERROR",
        }
    }

    /// Returns true when the error reflects a bug in the calling code
    /// rather than bad data.
    #[must_use]
    pub const fn is_programmer_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
