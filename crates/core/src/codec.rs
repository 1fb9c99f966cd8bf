//! External representation of money.
//!
//! The wire shape is `{"amount": <number>, "currency": "<code>"}` where the
//! amount carries exactly the currency's fraction digits. Codecs are plain
//! values handed to whoever needs them; another wire shape is another
//! [`MoneyCodec`] implementation.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Number;
use tally_shared::types::{Numeric, normalize_code};
use tally_shared::{MoneyError, MoneyResult};

use crate::currency::CurrencyRegistry;
use crate::currency::formatter::fixed_point;
use crate::money::Money;

/// Converts money to and from a textual representation.
pub trait MoneyCodec {
    /// Encodes a value.
    ///
    /// # Errors
    ///
    /// Returns `Encode` if the value cannot be represented.
    fn encode(&self, money: &Money) -> MoneyResult<String>;

    /// Decodes a value, resolving its currency through `registry`.
    ///
    /// # Errors
    ///
    /// Returns `Decode` for malformed input.
    fn decode(&self, input: &str, registry: &CurrencyRegistry) -> MoneyResult<Money>;
}

/// JSON codec.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::{CurrencyRegistry, JsonCodec, MoneyCodec};
///
/// let registry = CurrencyRegistry::with_defaults();
/// let codec = JsonCodec;
///
/// let json = codec.encode(&registry.money(dec!(123.45), "IQD")).unwrap();
/// assert_eq!(json, r#"{"amount":123.450,"currency":"IQD"}"#);
///
/// let back = codec.decode(&json, &registry).unwrap();
/// assert_eq!(back.amount(), dec!(123.45));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl MoneyCodec for JsonCodec {
    fn encode(&self, money: &Money) -> MoneyResult<String> {
        serde_json::to_string(money).map_err(|e| MoneyError::Encode(e.to_string()))
    }

    fn decode(&self, input: &str, registry: &CurrencyRegistry) -> MoneyResult<Money> {
        let wire: WireInput =
            serde_json::from_str(input).map_err(|e| MoneyError::Decode(e.to_string()))?;

        let amount = match wire.amount {
            Some(number) => Numeric::from(number.to_string())
                .to_decimal()
                .map_err(|e| MoneyError::Decode(e.to_string()))?,
            None => Decimal::ZERO,
        };
        let code = wire.currency.unwrap_or_default();

        if amount.is_zero() && normalize_code(&code).is_empty() {
            return Ok(Money::empty());
        }
        Ok(registry.money(amount, &code))
    }
}

#[derive(Serialize)]
struct WireOutput<'a> {
    amount: Number,
    currency: &'a str,
}

#[derive(Deserialize)]
struct WireInput {
    #[serde(default)]
    amount: Option<Number>,
    #[serde(default)]
    currency: Option<String>,
}

/// Amount as a JSON number truncated to exactly the currency fraction,
/// without a negative sign on zero.
fn wire_number(money: &Money) -> Result<Number, serde_json::Error> {
    let fraction = money.currency().fraction();
    let (integer, digits) = fixed_point(money.amount(), fraction);
    let is_zero = integer == "0" && digits.bytes().all(|b| b == b'0');

    let mut text = String::with_capacity(integer.len() + digits.len() + 2);
    if money.is_negative() && !is_zero {
        text.push('-');
    }
    text.push_str(&integer);
    if fraction > 0 {
        text.push('.');
        text.push_str(&digits);
    }
    Number::from_str(&text)
}

/// Writes `{"amount": <number>, "currency": "<code>"}`.
///
/// The amount is a `serde_json::Number` holding the exact digits, which only
/// serde_json (built with `arbitrary_precision`) renders as a number. Other
/// formats should go through their own [`MoneyCodec`].
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let amount = wire_number(self).map_err(serde::ser::Error::custom)?;
        WireOutput {
            amount,
            currency: self.code(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn registry() -> CurrencyRegistry {
        CurrencyRegistry::with_defaults()
    }

    #[rstest]
    #[case(dec!(123.45), "IQD", r#"{"amount":123.450,"currency":"IQD"}"#)]
    #[case(dec!(100.12), "USD", r#"{"amount":100.12,"currency":"USD"}"#)]
    #[case(dec!(1234.9), "JPY", r#"{"amount":1234,"currency":"JPY"}"#)]
    #[case(dec!(-1.239), "EUR", r#"{"amount":-1.23,"currency":"EUR"}"#)]
    #[case(dec!(-0.001), "EUR", r#"{"amount":0.00,"currency":"EUR"}"#)]
    fn test_encode(#[case] amount: Decimal, #[case] code: &str, #[case] expected: &str) {
        let money = registry().money(amount, code);
        assert_eq!(JsonCodec.encode(&money).unwrap(), expected);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(
            JsonCodec.encode(&Money::empty()).unwrap(),
            r#"{"amount":0.00,"currency":""}"#
        );
    }

    #[test]
    fn test_serialize_nested() {
        let money = registry().money(dec!(5), "GBP");
        let json = serde_json::to_string(&vec![money]).unwrap();
        assert_eq!(json, r#"[{"amount":5.00,"currency":"GBP"}]"#);
    }

    #[test]
    fn test_decode() {
        let registry = registry();
        let money = JsonCodec
            .decode(r#"{"amount": 100.12, "currency":"USD"}"#, &registry)
            .unwrap();
        assert_eq!(money.amount(), dec!(100.12));
        assert_eq!(money.display(), "$100.12");
    }

    #[test]
    fn test_decode_lowercase_and_unknown_codes() {
        let registry = registry();
        let usd = JsonCodec
            .decode(r#"{"amount":1,"currency":"usd"}"#, &registry)
            .unwrap();
        assert_eq!(usd.code(), "USD");

        let foo = JsonCodec
            .decode(r#"{"amount":1,"currency":"FOO"}"#, &registry)
            .unwrap();
        assert_eq!(foo.display(), "1.00FOO");
    }

    #[test]
    fn test_encode_pads_large_fraction() {
        let registry = CurrencyRegistry::new();
        registry
            .register("BIG", 28, tally_shared::types::DisplayTemplate::suffix_code("BIG"))
            .unwrap();
        let expected = format!(r#"{{"amount":1000.{},"currency":"BIG"}}"#, "0".repeat(28));
        assert_eq!(JsonCodec.encode(&registry.money(dec!(1000), "BIG")).unwrap(), expected);
    }

    #[test]
    fn test_serialize_into_json_value() {
        let money = registry().money(dec!(123.45), "IQD");
        let value = serde_json::to_value(&money).unwrap();
        assert_eq!(value["amount"].to_string(), "123.450");
        assert_eq!(value["currency"], "IQD");
    }

    #[rstest]
    #[case("{}")]
    #[case(r#"{"amount":0,"currency":""}"#)]
    #[case(r#"{"amount":0.00,"currency":""}"#)]
    #[case(r#"{"amount":null,"currency":null}"#)]
    fn test_decode_empty(#[case] input: &str) {
        let money = JsonCodec.decode(input, &registry()).unwrap();
        assert!(money.is_empty());
    }

    #[test]
    fn test_decode_amount_without_currency() {
        let money = JsonCodec.decode(r#"{"amount":5}"#, &registry()).unwrap();
        assert!(!money.is_empty());
        assert_eq!(money.code(), "");
        assert_eq!(money.amount(), dec!(5));
    }

    #[rstest]
    #[case(r#"{"amount":"foo","currency":"USD"}"#)]
    #[case(r#"{"amount":1,"currency":978}"#)]
    #[case(r#"{"amount":1,"#)]
    #[case(r#""42""#)]
    #[case("not json")]
    fn test_decode_rejects_malformed(#[case] input: &str) {
        let result = JsonCodec.decode(input, &registry());
        assert!(matches!(result, Err(MoneyError::Decode(_))), "{input}");
    }

    /// Wire shape carrying the fraction next to the code.
    struct FractionCodec;

    #[derive(Serialize, Deserialize)]
    struct FractionWire {
        amount: Number,
        currency_code: String,
        currency_fraction: u32,
    }

    impl MoneyCodec for FractionCodec {
        fn encode(&self, money: &Money) -> MoneyResult<String> {
            let wire = FractionWire {
                amount: wire_number(money).map_err(|e| MoneyError::Encode(e.to_string()))?,
                currency_code: money.code().to_string(),
                currency_fraction: money.currency().fraction(),
            };
            serde_json::to_string(&wire).map_err(|e| MoneyError::Encode(e.to_string()))
        }

        fn decode(&self, input: &str, registry: &CurrencyRegistry) -> MoneyResult<Money> {
            let wire: FractionWire =
                serde_json::from_str(input).map_err(|e| MoneyError::Decode(e.to_string()))?;
            let amount = Numeric::from(wire.amount.to_string())
                .to_decimal()
                .map_err(|e| MoneyError::Decode(e.to_string()))?;
            let currency = registry
                .lookup(&wire.currency_code)
                .filter(|c| c.fraction() == wire.currency_fraction)
                .ok_or_else(|| {
                    MoneyError::Decode(format!(
                        "unknown currency {} with fraction {}",
                        wire.currency_code, wire.currency_fraction
                    ))
                })?;
            Ok(Money::new(amount, currency))
        }
    }

    #[test]
    fn test_custom_codec_encode() {
        let codec: &dyn MoneyCodec = &FractionCodec;
        let money = registry().money(dec!(123.45), "IQD");
        assert_eq!(
            codec.encode(&money).unwrap(),
            r#"{"amount":123.450,"currency_code":"IQD","currency_fraction":3}"#
        );
    }

    #[test]
    fn test_custom_codec_decode() {
        let registry = registry();
        let codec: &dyn MoneyCodec = &FractionCodec;

        let money = codec
            .decode(
                r#"{"amount": 100.12, "currency_code":"USD", "currency_fraction":2}"#,
                &registry,
            )
            .unwrap();
        assert_eq!(money.display(), "$100.12");

        let result = codec.decode(
            r#"{"amount": 1, "currency_code":"USD", "currency_fraction":3}"#,
            &registry,
        );
        assert!(matches!(result, Err(MoneyError::Decode(_))));

        // the default shape lacks the extra fields
        let result = codec.decode(r#"{"amount":1,"currency":"USD"}"#, &registry);
        assert!(matches!(result, Err(MoneyError::Decode(_))));
    }

    #[test]
    fn test_round_trip() {
        let registry = registry();
        for (amount, code) in [
            (dec!(123.456), "IQD"),
            (dec!(-99.99), "GBP"),
            (dec!(0), "EUR"),
            (dec!(42), "JPY"),
        ] {
            let original = registry.money(amount, code);
            let decoded = JsonCodec
                .decode(&JsonCodec.encode(&original).unwrap(), &registry)
                .unwrap();
            assert_eq!(decoded, original);
        }
    }
}
