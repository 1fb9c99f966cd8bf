//! Common types used across the workspace.

pub mod currency;
pub mod numeric;

pub use currency::{Currency, DisplayTemplate, MAX_FRACTION, normalize_code};
pub use numeric::Numeric;
