//! Core money engine for Tally.
//!
//! This crate contains pure money logic with ZERO file, network, or async
//! dependencies. Amounts are exact decimals bound to a currency descriptor.
//!
//! # Modules
//!
//! - `calculator` - Decimal arithmetic primitives
//! - `currency` - Currency registry, ISO table and display formatting
//! - `money` - The `Money` value type
//! - `distribution` - Zero-leak split and ratio allocation
//! - `aggregate` - Sum, average, min, max, sort and median
//! - `codec` - JSON encoding and decoding

pub mod aggregate;
pub mod calculator;
pub mod codec;
pub mod currency;
pub mod distribution;
pub mod money;

#[cfg(test)]
mod distribution_props;

pub use calculator::Calculator;
pub use codec::{JsonCodec, MoneyCodec};
pub use currency::{AmountFormatter, CurrencyRegistry, TemplateFormatter};
pub use distribution::Distribution;
pub use money::Money;
pub use tally_shared::types::{Currency, DisplayTemplate, Numeric};
pub use tally_shared::{MoneyError, MoneyResult};
