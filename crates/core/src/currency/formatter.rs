//! Textual rendering of amounts using a currency's display template.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use tally_shared::types::Currency;

/// Renders an amount for a currency.
pub trait AmountFormatter {
    /// Formats `amount` using the display conventions of `currency`.
    fn format(&self, amount: Decimal, currency: &Currency) -> String;
}

/// Template-driven formatter.
///
/// The absolute amount is truncated to the currency fraction, the integer
/// part is grouped by the thousands separator, and the result is placed
/// into the template (`1` for the number, `$` for the grapheme). Negative
/// amounts get a leading `-`.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFormatter {
    with_grapheme: bool,
}

impl Default for TemplateFormatter {
    fn default() -> Self {
        Self {
            with_grapheme: true,
        }
    }
}

impl TemplateFormatter {
    /// Formatter that leaves the currency symbol out.
    #[must_use]
    pub const fn without_grapheme() -> Self {
        Self {
            with_grapheme: false,
        }
    }
}

impl AmountFormatter for TemplateFormatter {
    fn format(&self, amount: Decimal, currency: &Currency) -> String {
        let template = currency.template();
        let fraction = currency.fraction();

        let (integer, digits) = fixed_point(amount, fraction);

        let mut number = group_thousands(&integer, &template.thousand);
        if fraction > 0 {
            number.push_str(&template.decimal);
            number.push_str(&digits);
        }

        let grapheme = if self.with_grapheme {
            template.grapheme.as_str()
        } else {
            ""
        };
        let placed = template
            .template
            .replacen('1', &number, 1)
            .replacen('$', grapheme, 1);

        if amount < Decimal::ZERO {
            format!("-{placed}")
        } else {
            placed
        }
    }
}

/// Integer and fraction digits of `|amount|` truncated to `fraction` places.
///
/// The fraction digits are zero-padded to exactly `fraction` characters;
/// `Decimal::rescale` cannot be used for this since it caps the scale once
/// the integer part fills the mantissa.
pub(crate) fn fixed_point(amount: Decimal, fraction: u32) -> (String, String) {
    let truncated = amount
        .abs()
        .round_dp_with_strategy(fraction, RoundingStrategy::ToZero);
    let text = truncated.to_string();
    let (integer, digits) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let width = fraction as usize;
    (integer.to_string(), format!("{digits:0<width$}"))
}

fn group_thousands(integer: &str, separator: &str) -> String {
    if separator.is_empty() || integer.len() <= 3 {
        return integer.to_string();
    }

    let head = integer.len() % 3;
    let mut grouped = String::with_capacity(integer.len() + separator.len() * (integer.len() / 3));
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (i + 3 - head) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
