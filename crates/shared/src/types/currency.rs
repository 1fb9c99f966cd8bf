//! Currency descriptor.
//!
//! A descriptor is immutable once built: it is handed out as
//! `Arc<Currency>` and every `Money` holding it sees the same values for
//! its whole lifetime.

use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};

/// Largest fraction a `Decimal` can represent.
pub const MAX_FRACTION: u32 = 28;

/// Display pieces consumed by the formatter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayTemplate {
    /// Currency symbol, substituted for `$` in the template.
    pub grapheme: String,
    /// Placement template: `1` marks the number, `$` the symbol.
    pub template: String,
    /// Decimal separator.
    pub decimal: String,
    /// Thousands separator; empty disables grouping.
    pub thousand: String,
}

impl DisplayTemplate {
    /// Creates a template from its pieces.
    #[must_use]
    pub fn new(
        grapheme: impl Into<String>,
        template: impl Into<String>,
        decimal: impl Into<String>,
        thousand: impl Into<String>,
    ) -> Self {
        Self {
            grapheme: grapheme.into(),
            template: template.into(),
            decimal: decimal.into(),
            thousand: thousand.into(),
        }
    }

    /// Template used for unregistered codes: the code itself after the number.
    #[must_use]
    pub fn suffix_code(code: &str) -> Self {
        Self::new(code, "1$", ".", ",")
    }
}

/// Currency descriptor: code, minor-unit digits, and display template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    code: String,
    fraction: u32,
    template: DisplayTemplate,
}

impl Currency {
    /// Creates a descriptor, normalizing the code to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `fraction` exceeds [`MAX_FRACTION`].
    pub fn new(code: &str, fraction: u32, template: DisplayTemplate) -> MoneyResult<Self> {
        if fraction > MAX_FRACTION {
            return Err(MoneyError::InvalidArgument(format!(
                "fraction {fraction} exceeds maximum of {MAX_FRACTION}"
            )));
        }

        Ok(Self {
            code: normalize_code(code),
            fraction,
            template,
        })
    }

    /// Synthetic descriptor for a code missing from the registry.
    ///
    /// `fraction` is clamped to [`MAX_FRACTION`].
    #[must_use]
    pub fn unknown(code: &str, fraction: u32) -> Self {
        let code = normalize_code(code);
        let template = DisplayTemplate::suffix_code(&code);
        Self {
            code,
            fraction: fraction.min(MAX_FRACTION),
            template,
        }
    }

    /// Descriptor carried by empty money: no code, two fraction digits.
    #[must_use]
    pub fn unset() -> Self {
        Self::unknown("", 2)
    }

    /// Uppercase currency code; empty when unset.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of minor-unit digits.
    #[must_use]
    pub const fn fraction(&self) -> u32 {
        self.fraction
    }

    /// Display template pieces.
    #[must_use]
    pub const fn template(&self) -> &DisplayTemplate {
        &self.template
    }

    /// Returns true when the descriptor has no code.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.code.is_empty()
    }

    /// Smallest representable amount, `10^-fraction`.
    #[must_use]
    pub fn minor_unit(&self) -> Decimal {
        // fraction <= MAX_FRACTION is enforced by every constructor
        Decimal::new(1, self.fraction)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

/// Normalizes a currency code: trimmed and uppercase.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
