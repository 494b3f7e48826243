//! Amount type for the numeric value of a transaction.
//!
//! Amounts are plain signed floating point numbers with no currency attached. Parsing accepts
//! anything that reads as a finite decimal number, ignoring surrounding whitespace.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the amount of a transaction.
///
/// Whole numbers are displayed with a trailing `.0` so that the amount always reads as a decimal.
///
/// # Examples
///
/// ```
/// # use finance_manager::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("1500").unwrap();
/// assert_eq!(amount.to_string(), "1500.0");
///
/// let amount = Amount::from_str("-12.5").unwrap();
/// assert_eq!(amount.to_string(), "-12.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    /// Creates an `Amount`, returning an error if `value` is infinite or NaN.
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(AmountError::NotFinite)
        }
    }

    /// Returns the underlying value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// An error that can occur when parsing strings into `Amount` values.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountError {
    /// The text is not a number.
    Parse(std::num::ParseFloatError),
    /// The text is a number but it is infinite or NaN, which cannot be stored.
    NotFinite,
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Parse(e) => Display::fmt(e, f),
            AmountError::NotFinite => f.write_str("amount must be a finite number"),
        }
    }
}

impl Error for AmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AmountError::Parse(e) => Some(e),
            AmountError::NotFinite => None,
        }
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = f64::from_str(s.trim()).map_err(AmountError::Parse)?;
        Amount::new(value)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Large magnitudes fall through to the shortest round-trip representation.
        if self.0.fract() == 0.0 && self.0.abs() < 1e16 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Amount::new(value).map_err(serde::de::Error::custom)
    }
}
