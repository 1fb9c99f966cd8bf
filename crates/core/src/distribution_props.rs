//! Property-based tests for money distribution and arithmetic.
//!
//! - Zero-leak split and allocation
//! - Round-robin fairness
//! - Divide/modulus consistency
//! - Currency mismatch symmetry
//! - Codec round-trip

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::calculator::Calculator;
use crate::codec::{JsonCodec, MoneyCodec};
use crate::currency::CurrencyRegistry;
use crate::distribution::Distribution;

/// Strategy to generate signed amounts with up to 4 decimal places.
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64, 0u32..=4).prop_map(|(v, scale)| Decimal::new(v, scale))
}

/// Strategy to generate party counts (1 to 50).
fn party_count() -> impl Strategy<Value = usize> {
    1usize..50
}

/// Strategy to generate currency fractions (0 to 3).
fn fraction() -> impl Strategy<Value = u32> {
    0u32..=3
}

/// Strategy to generate non-empty ratio lists.
fn ratios() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..1_000, 1..10)
}

/// Strategy to generate non-zero divisors.
fn divisor() -> impl Strategy<Value = Decimal> {
    (1i64..10_000i64, any::<bool>(), 0u32..=2).prop_map(|(v, negative, scale)| {
        let d = Decimal::new(v, scale);
        if negative { -d } else { d }
    })
}

fn units_of(share: Decimal, unit: Decimal) -> Decimal {
    (share / unit).trunc()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Shares produced by split always sum back to the total.
    #[test]
    fn prop_split_never_leaks(
        total in signed_amount(),
        parts in party_count(),
        fraction in fraction(),
    ) {
        let shares = Distribution::split(total, parts, fraction).unwrap();
        prop_assert_eq!(shares.len(), parts);
        prop_assert_eq!(shares.iter().copied().sum::<Decimal>(), total);
    }

    /// Earlier parties never receive fewer whole units than later ones, and
    /// no two parties differ by more than one unit.
    #[test]
    fn prop_split_is_fair(
        total in signed_amount(),
        parts in party_count(),
        fraction in fraction(),
    ) {
        let unit = Decimal::new(1, fraction);
        let shares = Distribution::split(total, parts, fraction).unwrap();
        let units: Vec<Decimal> = shares.iter().map(|s| units_of(s.abs(), unit)).collect();

        for pair in units.windows(2) {
            prop_assert!(pair[0] >= pair[1], "units not descending: {:?}", units);
        }
        let spread = units[0] - units[units.len() - 1];
        prop_assert!(spread <= Decimal::ONE, "spread {} too large", spread);
    }

    /// Shares produced by allocate always sum back to the total unless every
    /// ratio is zero.
    #[test]
    fn prop_allocate_never_leaks(
        total in signed_amount(),
        ratios in ratios(),
        fraction in fraction(),
    ) {
        let shares = Distribution::allocate(total, &ratios, fraction).unwrap();
        prop_assert_eq!(shares.len(), ratios.len());

        let sum: Decimal = shares.iter().copied().sum();
        if ratios.iter().all(|r| *r == 0) {
            prop_assert!(sum.is_zero());
        } else {
            prop_assert_eq!(sum, total);
        }
    }

    /// `b * divide(a, b) + modulus(a, b) == a` at every precision.
    #[test]
    fn prop_divide_modulus_consistent(
        a in signed_amount(),
        b in divisor(),
        precision in fraction(),
    ) {
        let quotient = Calculator::divide(a, b, precision).unwrap();
        let remainder = Calculator::modulus(a, b, precision).unwrap();
        prop_assert_eq!(b * quotient + remainder, a);
    }

    /// Comparing values of different currencies fails in both directions.
    #[test]
    fn prop_mismatch_is_symmetric(a in signed_amount(), b in signed_amount()) {
        let registry = CurrencyRegistry::with_defaults();
        let gbp = registry.money(a, "GBP");
        let eur = registry.money(b, "EUR");

        prop_assert!(gbp.equals(&eur).is_err());
        prop_assert!(eur.equals(&gbp).is_err());
        prop_assert!(gbp.add([&eur]).is_err());
        prop_assert!(eur.subtract([&gbp]).is_err());
    }

    /// Values already at the currency precision survive encode/decode.
    #[test]
    fn prop_codec_round_trip(
        cents in -100_000_000i64..100_000_000i64,
        code in prop::sample::select(vec!["GBP", "EUR", "USD", "IQD", "JPY"]),
    ) {
        let registry = CurrencyRegistry::with_defaults();
        let fraction = registry.resolve(code).fraction();
        let original = registry.money(Decimal::new(cents, fraction), code);

        let json = JsonCodec.encode(&original).unwrap();
        let decoded = JsonCodec.decode(&json, &registry).unwrap();
        prop_assert_eq!(decoded, original);
    }
}

mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_units_of() {
        assert_eq!(units_of(dec!(0.34), dec!(0.01)), dec!(34));
        assert_eq!(units_of(dec!(0.505), dec!(0.01)), dec!(50));
    }
}
