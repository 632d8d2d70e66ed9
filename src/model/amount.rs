//! Amount type for signed monetary values.
//!
//! This module provides the `Amount` type which wraps `Decimal`. Positive amounts are income,
//! negative amounts are expenses. Amounts are written to JSON and CSV as plain numbers and can be
//! read back from either numbers or numeric strings.
//!
//! Parsed amounts carry at most 15 significant digits, which every `f64` holds exactly. A value
//! built from a `Decimal` with more digits is written as a numeric string instead.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The most significant digits an `f64` represents without loss.
pub const MAX_SIGNIFICANT_DIGITS: u32 = 15;

/// Represents a signed amount of money.
///
/// # Examples
///
/// ```
/// # use assistant::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("-50.5").unwrap();
/// assert!(amount.is_negative());
/// assert_eq!(amount.to_string(), "-50.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// Creates a new Amount from a Decimal value.
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value().is_zero()
    }

    /// Returns true if the amount is income.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.value().is_sign_positive()
    }

    /// Returns true if the amount is an expense.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.value().is_sign_negative()
    }
}

/// An error that can occur when parsing strings into `Amount` values.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AmountError {
    NotANumber(String),
    TooPrecise(String),
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::NotANumber(s) => write!(f, "'{s}' is not a number"),
            AmountError::TooPrecise(s) => write!(
                f,
                "'{s}' has more than {MAX_SIGNIFICANT_DIGITS} significant digits"
            ),
        }
    }
}

impl Error for AmountError {}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses user input. Input with more than [`MAX_SIGNIFICANT_DIGITS`] significant digits is
    /// rejected because it could not be stored exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_decimal(s)?;
        if significant_digits(value) > MAX_SIGNIFICANT_DIGITS {
            return Err(AmountError::TooPrecise(s.to_string()));
        }
        Ok(Amount::new(value))
    }
}

fn parse_decimal(s: &str) -> Result<Decimal, AmountError> {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Err(AmountError::NotANumber(s.to_string()));
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AmountError::NotANumber(s.to_string()))
}

/// Counts the digits of `value` without leading or trailing zeros, e.g. 3 for `120.500`.
fn significant_digits(value: Decimal) -> u32 {
    let mut mantissa = value.mantissa().unsigned_abs();
    if mantissa == 0 {
        return 0;
    }
    while mantissa % 10 == 0 {
        mantissa /= 10;
    }
    mantissa.ilog10() + 1
}

/// The decimal named by the shortest representation of `f`, e.g. `0.1` rather than the binary
/// expansion of the nearest `f64`.
fn decimal_from_f64(f: f64) -> Option<Decimal> {
    Decimal::from_str(&f.to_string()).ok()
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Parsing the decimal text gives the nearest f64, which `to_f64` does not promise.
        match self.value.to_string().parse::<f64>().ok() {
            Some(f) if decimal_from_f64(f) == Some(self.value) => serializer.serialize_f64(f),
            _ => serializer.serialize_str(&self.value.to_string()),
        }
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Ok(Amount::new(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Ok(Amount::new(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        decimal_from_f64(v)
            .or_else(|| Decimal::from_f64(v))
            .map(Amount::new)
            .ok_or_else(|| E::custom(format!("{v} is out of range for an amount")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        parse_decimal(v).map(Amount::new).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}
