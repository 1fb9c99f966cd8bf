//! Aggregates over collections of money.
//!
//! Every function checks currencies as it goes and stops at the first
//! mismatch; nothing is ever partially aggregated.

use rust_decimal::Decimal;
use tally_shared::MoneyResult;

use crate::calculator::Calculator;
use crate::money::Money;

/// Sums all values. An empty slice gives empty money.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::{CurrencyRegistry, aggregate};
///
/// let registry = CurrencyRegistry::with_defaults();
/// let values = [registry.money(dec!(1), "GBP"), registry.money(dec!(2.5), "GBP")];
/// assert_eq!(aggregate::sum(&values).unwrap().display(), "£3.50");
/// ```
pub fn sum(values: &[Money]) -> MoneyResult<Money> {
    match values.split_first() {
        Some((first, rest)) => first.add(rest),
        None => Ok(Money::empty()),
    }
}

/// Arithmetic mean, truncated to the currency fraction.
pub fn average(values: &[Money]) -> MoneyResult<Option<Money>> {
    if values.is_empty() {
        return Ok(None);
    }

    let total = sum(values)?;
    total.divide(values.len()).map(Some)
}

/// Smallest value; the first one wins on ties.
pub fn min(values: &[Money]) -> MoneyResult<Option<Money>> {
    extreme(values, Money::less_than)
}

/// Largest value; the first one wins on ties.
pub fn max(values: &[Money]) -> MoneyResult<Option<Money>> {
    extreme(values, Money::greater_than)
}

fn extreme(
    values: &[Money],
    better: impl Fn(&Money, &Money) -> MoneyResult<bool>,
) -> MoneyResult<Option<Money>> {
    let Some((first, rest)) = values.split_first() else {
        return Ok(None);
    };

    let mut best = first;
    for candidate in rest {
        if better(candidate, best)? {
            best = candidate;
        }
    }
    Ok(Some(best.clone()))
}

/// Stable ascending sort.
///
/// # Errors
///
/// Returns `CurrencyMismatch` before sorting if any two values differ in
/// currency.
pub fn sort(values: &[Money]) -> MoneyResult<Vec<Money>> {
    if let Some((first, rest)) = values.split_first() {
        for other in rest {
            first.compare(other)?;
        }
    }

    let mut sorted = values.to_vec();
    sorted.sort_by_key(Money::amount);
    Ok(sorted)
}

/// Median value.
///
/// For an even count the two middle values are averaged, truncating to the
/// currency fraction.
pub fn median(values: &[Money]) -> MoneyResult<Option<Money>> {
    let sorted = sort(values)?;
    let len = sorted.len();
    if len == 0 {
        return Ok(None);
    }

    let upper = &sorted[len / 2];
    if len % 2 == 1 {
        return Ok(Some(upper.clone()));
    }

    let lower = &sorted[len / 2 - 1];
    let total = Calculator::add(lower.amount(), upper.amount())?;
    let mid = Calculator::divide(total, Decimal::TWO, upper.currency().fraction())?;
    Ok(Some(upper.with_amount(mid)))
}
