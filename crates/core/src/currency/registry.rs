//! Currency registry.
//!
//! Maps normalized codes to shared, immutable descriptors. The registry is
//! an explicit object: construct one per application (or per test) and pass
//! it to whatever builds money values. Reads and registrations may happen
//! concurrently from any number of threads.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use tally_shared::types::{Currency, DisplayTemplate, Numeric, normalize_code};
use tally_shared::{MoneyResult, RegistryConfig};
use tracing::{debug, trace, warn};

use super::iso::ISO_CURRENCIES;
use crate::money::Money;

/// Fraction digits given to unregistered codes unless configured otherwise.
pub const DEFAULT_UNKNOWN_FRACTION: u32 = 2;

static UNSET: Lazy<Arc<Currency>> = Lazy::new(|| Arc::new(Currency::unset()));

/// Shared descriptor carried by empty money.
#[must_use]
pub fn unset_currency() -> Arc<Currency> {
    Arc::clone(&UNSET)
}

/// Lookup table from currency code to descriptor.
#[derive(Debug)]
pub struct CurrencyRegistry {
    currencies: DashMap<String, Arc<Currency>>,
    unknown_fraction: u32,
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl CurrencyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            currencies: DashMap::new(),
            unknown_fraction: DEFAULT_UNKNOWN_FRACTION,
        }
    }

    /// Creates a registry seeded with the built-in ISO 4217 table.
    #[must_use]
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        for (code, grapheme, template, decimal, thousand, fraction) in ISO_CURRENCIES {
            let template = DisplayTemplate::new(*grapheme, *template, *decimal, *thousand);
            let currency = Currency::new(code, *fraction, template);
            // fractions in the table are checked by iso::tests
            debug_assert!(currency.is_ok(), "invalid ISO row {code}");
            match currency {
                Ok(currency) => {
                    registry
                        .currencies
                        .insert(currency.code().to_string(), Arc::new(currency));
                }
                Err(error) => warn!(%code, %error, "Skipping invalid ISO currency row"),
            }
        }
        registry
    }

    /// Builds a registry from configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when a configured currency has an
    /// out-of-range fraction.
    pub fn from_config(config: &RegistryConfig) -> MoneyResult<Self> {
        let mut registry = if config.seed_iso {
            Self::with_defaults()
        } else {
            Self::new()
        };
        registry.unknown_fraction = config.unknown_fraction;

        for currency in &config.currencies {
            registry.register(
                &currency.code,
                currency.fraction,
                DisplayTemplate::new(
                    currency.grapheme.as_str(),
                    currency.template.as_str(),
                    currency.decimal.as_str(),
                    currency.thousand.as_str(),
                ),
            )?;
        }

        debug!(
            currencies = registry.len(),
            unknown_fraction = registry.unknown_fraction,
            "Currency registry configured"
        );
        Ok(registry)
    }

    /// Sets the fraction used for unregistered codes.
    #[must_use]
    pub fn with_unknown_fraction(mut self, fraction: u32) -> Self {
        self.unknown_fraction = fraction;
        self
    }

    /// Fraction used for unregistered codes.
    #[must_use]
    pub const fn unknown_fraction(&self) -> u32 {
        self.unknown_fraction
    }

    /// Registers or replaces a currency.
    ///
    /// Values already holding the previous descriptor keep it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `fraction` is out of range.
    pub fn register(
        &self,
        code: &str,
        fraction: u32,
        template: DisplayTemplate,
    ) -> MoneyResult<Arc<Currency>> {
        let currency = Arc::new(Currency::new(code, fraction, template)?);
        debug!(code = %currency.code(), fraction, "Registered currency");
        self.currencies
            .insert(currency.code().to_string(), Arc::clone(&currency));
        Ok(currency)
    }

    /// Looks up a registered currency (case-insensitive).
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<Arc<Currency>> {
        self.currencies
            .get(&normalize_code(code))
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Resolves a code, falling back to a synthetic descriptor.
    ///
    /// The empty code resolves to the unset descriptor; other unknown codes
    /// get the code as grapheme and the registry's unknown fraction.
    #[must_use]
    pub fn resolve(&self, code: &str) -> Arc<Currency> {
        if let Some(currency) = self.lookup(code) {
            return currency;
        }

        let normalized = normalize_code(code);
        if normalized.is_empty() {
            return unset_currency();
        }

        trace!(code = %normalized, "Unregistered currency, using fallback descriptor");
        Arc::new(Currency::unknown(&normalized, self.unknown_fraction))
    }

    /// Creates money from an exact amount.
    #[must_use]
    pub fn money(&self, amount: Decimal, code: &str) -> Money {
        Money::new(amount, self.resolve(code))
    }

    /// Creates money from any supported numeric input.
    ///
    /// # Errors
    ///
    /// Returns `Conversion` when the amount is not representable.
    pub fn parse(&self, amount: impl Into<Numeric>, code: &str) -> MoneyResult<Money> {
        let amount = amount.into().to_decimal()?;
        Ok(self.money(amount, code))
    }

    /// Registered codes, sorted.
    #[must_use]
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.currencies.iter().map(|e| e.key().clone()).collect();
        codes.sort_unstable();
        codes
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}
