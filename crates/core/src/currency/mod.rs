//! Currency registry and display formatting.

pub mod formatter;
mod iso;
pub mod registry;

pub use formatter::{AmountFormatter, TemplateFormatter};
pub use registry::{CurrencyRegistry, DEFAULT_UNKNOWN_FRACTION, unset_currency};
