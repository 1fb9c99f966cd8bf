//! Numeric inputs accepted wherever an amount or factor is expected.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};

/// Closed set of numeric input kinds.
///
/// Every kind converts to an exact `Decimal` through [`Numeric::to_decimal`];
/// anything that cannot be represented is rejected with
/// [`MoneyError::Conversion`].
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Binary floating point, converted through its shortest decimal text.
    Float(f64),
    /// Decimal text such as `"12.34"` or `"1.5e3"`.
    Text(String),
    /// Already exact.
    Decimal(Decimal),
}

impl Numeric {
    /// Converts the input to an exact decimal.
    ///
    /// # Errors
    ///
    /// Returns `Conversion` for non-finite floats, unparsable text, or values
    /// outside the decimal range.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        match self {
            Self::Int(v) => Ok(Decimal::from(*v)),
            Self::UInt(v) => Ok(Decimal::from(*v)),
            Self::Float(v) => {
                if !v.is_finite() {
                    return Err(MoneyError::Conversion(v.to_string()));
                }
                // f64 Display is the shortest text that round-trips
                parse_text(&v.to_string())
            }
            Self::Text(s) => parse_text(s),
            Self::Decimal(d) => Ok(*d),
        }
    }
}

fn parse_text(text: &str) -> MoneyResult<Decimal> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| MoneyError::Conversion(format!("{text:?}")))
}

macro_rules! numeric_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Numeric {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

numeric_from!(Int as i64: i8, i16, i32, i64);
numeric_from!(UInt as u64: u8, u16, u32, u64);
numeric_from!(Float as f64: f64);

impl From<f32> for Numeric {
    fn from(value: f32) -> Self {
        // widening first would expose binary digits (0.1 -> 0.10000000149011612);
        // re-read the shortest f32 text instead
        let shortest = value.to_string();
        Self::Float(f64::from_str(&shortest).unwrap_or_else(|_| f64::from(value)))
    }
}

impl From<isize> for Numeric {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        i64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Int)
    }
}

impl From<usize> for Numeric {
    fn from(value: usize) -> Self {
        u64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::UInt)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Numeric {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for Numeric {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&Decimal> for Numeric {
    fn from(value: &Decimal) -> Self {
        Self::Decimal(*value)
    }
}
