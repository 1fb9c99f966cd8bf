//! Money value type.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` in major units (`1.00` is one pound,
//! not one penny) and every operation returns a new value.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::ToPrimitive;
use tally_shared::types::{Currency, Numeric};
use tally_shared::{MoneyError, MoneyResult};

use crate::calculator::Calculator;
use crate::currency::{AmountFormatter, TemplateFormatter, unset_currency};

/// An exact amount bound to a currency.
///
/// Two values only compare or combine when their currency codes are equal.
#[derive(Debug, Clone)]
pub struct Money {
    amount: Decimal,
    currency: Arc<Currency>,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub fn new(amount: Decimal, currency: Arc<Currency>) -> Self {
        Self { amount, currency }
    }

    /// Zero amount with no currency.
    ///
    /// Empty money is skipped by [`Money::add`] and [`Money::subtract`], so
    /// it works as the starting point of a running total.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Decimal::ZERO, unset_currency())
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: Arc<Currency>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Exact amount in major units.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Currency descriptor.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Currency code; empty for empty money.
    #[must_use]
    pub fn code(&self) -> &str {
        self.currency.code()
    }

    /// Returns true when the amount is zero and no currency is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amount.is_zero() && self.currency.is_unset()
    }

    /// Returns true when both values carry the same currency code.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency.code() == other.currency.code()
    }

    fn assert_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::mismatch(self.code(), other.code()))
        }
    }

    pub(crate) fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            amount,
            currency: Arc::clone(&self.currency),
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Three-way comparison of two same-currency amounts.
    ///
    /// The raw ordering of mismatched values stays available through
    /// `self.amount().cmp(&other.amount())`.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.assert_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Checks equality of two same-currency amounts.
    pub fn equals(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// Checks whether this amount is greater than the other.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Checks whether this amount is greater than or equal to the other.
    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// Checks whether this amount is less than the other.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Checks whether this amount is less than or equal to the other.
    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true if the amount is less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Adds every operand to this value.
    ///
    /// Empty operands are skipped. The result carries this value's currency,
    /// or, when this value is empty, the first currency found among the
    /// operands.
    ///
    /// # Errors
    ///
    /// - `CurrencyMismatch` if an operand has a different currency
    /// - `NoCurrency` if no value carries a currency
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::CurrencyRegistry;
    ///
    /// let registry = CurrencyRegistry::with_defaults();
    /// let pound = registry.money(dec!(1), "GBP");
    /// let two_pounds = registry.money(dec!(2), "GBP");
    ///
    /// let total = pound.add([&two_pounds]).unwrap();
    /// assert_eq!(total.display(), "£3.00");
    /// ```
    pub fn add<'a>(&self, others: impl IntoIterator<Item = &'a Self>) -> MoneyResult<Self> {
        let (currency, total) = self.accumulate(others)?;
        match currency {
            Some(currency) => Ok(Self::new(
                Calculator::add(self.amount, total)?,
                currency,
            )),
            None => Ok(self.clone()),
        }
    }

    /// Subtracts every operand from this value.
    ///
    /// Follows the same currency rules as [`Money::add`].
    pub fn subtract<'a>(&self, others: impl IntoIterator<Item = &'a Self>) -> MoneyResult<Self> {
        let (currency, total) = self.accumulate(others)?;
        match currency {
            Some(currency) => Ok(Self::new(
                Calculator::subtract(self.amount, total)?,
                currency,
            )),
            None => Ok(self.clone()),
        }
    }

    /// Sums the non-empty operands after settling the result currency.
    ///
    /// Returns `None` as the currency when there are no operands at all.
    fn accumulate<'a>(
        &self,
        others: impl IntoIterator<Item = &'a Self>,
    ) -> MoneyResult<(Option<Arc<Currency>>, Decimal)> {
        let others: Vec<&Self> = others.into_iter().collect();
        if others.is_empty() {
            return Ok((None, Decimal::ZERO));
        }

        let currency = if self.currency.is_unset() {
            others
                .iter()
                .find(|m| !m.currency.is_unset())
                .map(|m| Arc::clone(&m.currency))
                .ok_or(MoneyError::NoCurrency)?
        } else {
            Arc::clone(&self.currency)
        };

        let mut total = Decimal::ZERO;
        for other in others {
            if other.is_empty() {
                continue;
            }
            if other.code() != currency.code() {
                return Err(MoneyError::mismatch(currency.code(), other.code()));
            }
            total = Calculator::add(total, other.amount)?;
        }

        Ok((Some(currency), total))
    }

    /// Multiplies this value by the product of all multipliers.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if no multiplier is given
    /// - `Conversion` if a multiplier is not representable
    pub fn multiply<N: Into<Numeric>>(
        &self,
        multipliers: impl IntoIterator<Item = N>,
    ) -> MoneyResult<Self> {
        let mut factors = multipliers.into_iter().peekable();
        if factors.peek().is_none() {
            return Err(MoneyError::InvalidArgument(
                "at least one multiplier is required".to_string(),
            ));
        }

        let mut product = Decimal::ONE;
        for factor in factors {
            product = Calculator::multiply(product, factor.into().to_decimal()?)?;
        }

        Ok(self.with_amount(Calculator::multiply(self.amount, product)?))
    }

    /// Divides this value, truncating to the currency's fraction digits.
    ///
    /// # Errors
    ///
    /// - `DivisionByZero` for a zero divisor
    /// - `Conversion` if the divisor is not representable
    pub fn divide(&self, divisor: impl Into<Numeric>) -> MoneyResult<Self> {
        let divisor = divisor.into().to_decimal()?;
        Ok(self.with_amount(Calculator::divide(
            self.amount,
            divisor,
            self.currency.fraction(),
        )?))
    }

    /// Rounds to the nearest whole major unit, half away from zero.
    #[must_use]
    pub fn round(&self) -> Self {
        self.with_amount(Calculator::round(self.amount, 0))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn absolute(&self) -> Self {
        self.with_amount(Calculator::absolute(self.amount))
    }

    /// Returns the negated value.
    #[must_use]
    pub fn negative(&self) -> Self {
        self.with_amount(Calculator::negative(self.amount))
    }

    // ========================================================================
    // Presentation
    // ========================================================================

    /// Amount as a float in major units, truncated to the currency fraction.
    ///
    /// Only meant for presentation; never feed the result back into
    /// arithmetic.
    #[must_use]
    pub fn as_major_units(&self) -> f64 {
        let truncated = self
            .amount
            .round_dp_with_strategy(self.currency.fraction(), RoundingStrategy::ToZero);
        truncated.to_f64().unwrap_or_default()
    }

    /// Renders the value with the currency's symbol and template.
    #[must_use]
    pub fn display(&self) -> String {
        self.display_with(&TemplateFormatter::default())
    }

    /// Renders the value without the currency symbol.
    #[must_use]
    pub fn simple(&self) -> String {
        self.display_with(&TemplateFormatter::without_grapheme())
    }

    /// Renders the value with a custom formatter.
    #[must_use]
    pub fn display_with(&self, formatter: &impl AmountFormatter) -> String {
        formatter.format(self.amount, &self.currency)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.same_currency(other) && self.amount == other.amount
    }
}

impl Eq for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
