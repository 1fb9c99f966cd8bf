//! Decimal arithmetic primitives.
//!
//! The calculator knows nothing about currencies: callers pass the
//! precision explicitly. Division truncates toward zero; callers that need
//! rounding call [`Calculator::round`] themselves.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use tally_shared::{MoneyError, MoneyResult};

/// Stateless arithmetic over exact decimals.
pub struct Calculator;

impl Calculator {
    /// Exact sum.
    pub fn add(a: Decimal, b: Decimal) -> MoneyResult<Decimal> {
        a.checked_add(b).ok_or(MoneyError::Overflow)
    }

    /// Exact difference.
    pub fn subtract(a: Decimal, b: Decimal) -> MoneyResult<Decimal> {
        a.checked_sub(b).ok_or(MoneyError::Overflow)
    }

    /// Exact product.
    pub fn multiply(a: Decimal, b: Decimal) -> MoneyResult<Decimal> {
        a.checked_mul(b).ok_or(MoneyError::Overflow)
    }

    /// Divides and truncates the quotient to `precision` digits.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::Calculator;
    ///
    /// assert_eq!(Calculator::divide(dec!(2), dec!(3), 2).unwrap(), dec!(0.66));
    /// assert_eq!(Calculator::divide(dec!(-2), dec!(3), 2).unwrap(), dec!(-0.66));
    /// ```
    pub fn divide(a: Decimal, b: Decimal, precision: u32) -> MoneyResult<Decimal> {
        if b.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }

        let quotient = a.checked_div(b).ok_or(MoneyError::Overflow)?;
        Ok(quotient.round_dp_with_strategy(precision, RoundingStrategy::ToZero))
    }

    /// Remainder left by [`Calculator::divide`] at the same precision.
    ///
    /// `b * divide(a, b, p) + modulus(a, b, p) == a` holds exactly.
    pub fn modulus(a: Decimal, b: Decimal, precision: u32) -> MoneyResult<Decimal> {
        let quotient = Self::divide(a, b, precision)?;
        Self::subtract(a, Self::multiply(b, quotient)?)
    }

    /// Share of `a` for `ratio` out of `sum`, rounded half away from zero.
    ///
    /// Returns exact zero when `a` or `sum` is zero.
    pub fn allocate(a: Decimal, ratio: Decimal, sum: Decimal, precision: u32) -> MoneyResult<Decimal> {
        if a.is_zero() || sum.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let share = Self::multiply(a, ratio)?
            .checked_div(sum)
            .ok_or(MoneyError::Overflow)?;
        Ok(share.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Absolute value.
    #[must_use]
    pub fn absolute(a: Decimal) -> Decimal {
        a.abs()
    }

    /// Negated value.
    #[must_use]
    pub fn negative(a: Decimal) -> Decimal {
        -a
    }

    /// Rounds half away from zero to `digits` fractional digits.
    #[must_use]
    pub fn round(a: Decimal, digits: u32) -> Decimal {
        a.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
    }
}
