//! Zero-leak distribution of amounts across parties.
//!
//! Both algorithms work the same way:
//! 1. Give every party a base share at the currency's precision
//! 2. Compute the leftover (total - sum of shares)
//! 3. Hand the leftover out one minor unit at a time, round-robin from the
//!    first party, with the leftover's sign
//!
//! The sum of the shares always equals the original total, and earlier
//! parties never receive fewer units than later ones.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tally_shared::{MoneyError, MoneyResult};
use tracing::trace;

use crate::calculator::Calculator;
use crate::money::Money;

/// Distribution of raw decimal totals.
pub struct Distribution;

impl Distribution {
    /// Splits `total` into `parts` near-equal shares at `fraction` digits.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `parts` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::Distribution;
    ///
    /// let shares = Distribution::split(dec!(100), 3, 2).unwrap();
    /// assert_eq!(shares, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
    /// ```
    pub fn split(total: Decimal, parts: usize, fraction: u32) -> MoneyResult<Vec<Decimal>> {
        if parts == 0 {
            return Err(MoneyError::InvalidArgument(
                "split must be higher than zero".to_string(),
            ));
        }

        let count = Decimal::from(parts);
        let base = Calculator::divide(total, count, fraction)?;
        let remainder = Calculator::modulus(total, count, fraction)?;

        let mut shares = vec![base; parts];
        distribute_leftover(&mut shares, remainder, minor_unit(fraction))?;
        Ok(shares)
    }

    /// Allocates `total` by integer ratios at `fraction` digits.
    ///
    /// When the ratios sum to zero every share is zero and nothing is
    /// distributed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty ratio list, a negative ratio,
    /// or a ratio sum that overflows `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::Distribution;
    ///
    /// let shares = Distribution::allocate(dec!(1), &[33, 33, 33], 2).unwrap();
    /// assert_eq!(shares, vec![dec!(0.34), dec!(0.33), dec!(0.33)]);
    /// ```
    pub fn allocate(total: Decimal, ratios: &[i64], fraction: u32) -> MoneyResult<Vec<Decimal>> {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidArgument("no ratios specified".to_string()));
        }

        let mut sum: i64 = 0;
        for ratio in ratios {
            if *ratio < 0 {
                return Err(MoneyError::InvalidArgument(
                    "negative ratios not allowed".to_string(),
                ));
            }
            sum = sum.checked_add(*ratio).ok_or_else(|| {
                MoneyError::InvalidArgument("sum of given ratios exceeds max int".to_string())
            })?;
        }

        let sum = Decimal::from(sum);
        let mut shares = ratios
            .iter()
            .map(|ratio| Calculator::allocate(total, Decimal::from(*ratio), sum, fraction))
            .collect::<MoneyResult<Vec<_>>>()?;

        if sum.is_zero() {
            return Ok(shares);
        }

        let allocated = shares
            .iter()
            .try_fold(Decimal::ZERO, |acc, share| Calculator::add(acc, *share))?;
        let leftover = Calculator::subtract(total, allocated)?;
        distribute_leftover(&mut shares, leftover, minor_unit(fraction))?;
        Ok(shares)
    }
}

fn minor_unit(fraction: u32) -> Decimal {
    Decimal::new(1, fraction)
}

/// Adds `leftover` to `shares` one `unit` at a time, round-robin from index 0.
///
/// A residual smaller than one unit (possible when the total carries more
/// digits than the precision) goes to the first share.
fn distribute_leftover(shares: &mut [Decimal], leftover: Decimal, unit: Decimal) -> MoneyResult<()> {
    if shares.is_empty() || leftover.is_zero() {
        return Ok(());
    }

    let step = if leftover < Decimal::ZERO { -unit } else { unit };
    let whole_units = Calculator::divide(leftover, step, 0)?;
    let count = whole_units.to_usize().ok_or(MoneyError::Overflow)?;
    trace!(%leftover, units = count, parties = shares.len(), "Distributing leftover");

    let parties = shares.len();
    for i in 0..count {
        let share = &mut shares[i % parties];
        *share = Calculator::add(*share, step)?;
    }

    let residual = Calculator::subtract(leftover, Calculator::multiply(step, whole_units)?)?;
    if !residual.is_zero() {
        shares[0] = Calculator::add(shares[0], residual)?;
    }

    Ok(())
}

impl Money {
    /// Splits this value into `n` parts.
    ///
    /// Leftover minor units go round-robin to the first parties, so parties
    /// listed first may receive one unit more than later ones.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `n` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::CurrencyRegistry;
    ///
    /// let registry = CurrencyRegistry::with_defaults();
    /// let parties = registry.money(dec!(2), "GBP").split(3).unwrap();
    /// let shown: Vec<String> = parties.iter().map(|p| p.display()).collect();
    /// assert_eq!(shown, ["£0.67", "£0.67", "£0.66"]);
    /// ```
    pub fn split(&self, n: usize) -> MoneyResult<Vec<Self>> {
        let shares = Distribution::split(self.amount(), n, self.currency().fraction())?;
        Ok(self.with_shares(shares))
    }

    /// Allocates this value by integer ratios without losing minor units.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty ratio list, a negative ratio,
    /// or an overflowing ratio sum.
    pub fn allocate(&self, ratios: &[i64]) -> MoneyResult<Vec<Self>> {
        let shares = Distribution::allocate(self.amount(), ratios, self.currency().fraction())?;
        Ok(self.with_shares(shares))
    }

    fn with_shares(&self, shares: Vec<Decimal>) -> Vec<Self> {
        shares
            .into_iter()
            .map(|share| self.with_amount(share))
            .collect()
    }
}
