//! Amount type for handling non-negative monetary values.
//!
//! This module provides the `Amount` type which wraps `Decimal` and handles parsing user input
//! that may include a currency marker and thousands separators.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use tracing::warn;

/// Currency markers that are accepted, and discarded, at the front of an amount.
const CURRENCY_MARKERS: &[&str] = &["Rs.", "Rs", "₹", "$"];

/// Represents a non-negative currency value.
///
/// Amounts are stored and summed as `Decimal` so that totals do not drift. On the wire they are
/// written as plain JSON numbers.
///
/// # Examples
///
/// Parsing with a currency marker and commas:
/// ```
/// # use expense_tracker::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("Rs. 1,250.50").unwrap();
/// assert_eq!(amount.to_string(), "1,250.50");
/// ```
///
/// Lenient parsing never fails:
/// ```
/// # use expense_tracker::model::Amount;
/// assert!(Amount::lenient("abc").is_zero());
/// assert!(Amount::lenient("-5").is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Creates a new `Amount`. Negative values are clamped to zero.
    pub fn new(value: Decimal) -> Self {
        if value.is_sign_negative() {
            Self::ZERO
        } else {
            Self(value)
        }
    }

    /// Creates an `Amount` from a whole number of currency units.
    pub fn whole(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Parses user input, coercing anything that is not a non-negative number to zero.
    pub fn lenient(s: &str) -> Self {
        match Amount::from_str(s) {
            Ok(amount) => amount,
            Err(e) => {
                warn!("Treating amount '{s}' as 0: {e}");
                Self::ZERO
            }
        }
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The value rounded to two decimal places without thousands separators, e.g. `1250.50`.
    pub fn plain(&self) -> String {
        format!("{:.2}", self.0.round_dp(2))
    }

    /// The value formatted for display with a currency symbol, e.g. `Rs. 1,250.50`.
    pub fn with_symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            self.to_string()
        } else {
            format!("{symbol} {self}")
        }
    }
}

/// An error that can occur when parsing strings into `Amount` values.
pub enum AmountError {
    Parse(rust_decimal::Error),
    Negative(Decimal),
}

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Parse(e) => Debug::fmt(e, f),
            AmountError::Negative(d) => write!(f, "Negative({d})"),
        }
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Parse(e) => Display::fmt(e, f),
            AmountError::Negative(d) => write!(f, "amount {d} is negative"),
        }
    }
}

impl std::error::Error for AmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AmountError::Parse(e) => Some(e),
            AmountError::Negative(_) => None,
        }
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // Empty input is zero
        if trimmed.is_empty() {
            return Ok(Amount::ZERO);
        }

        let without_marker = CURRENCY_MARKERS
            .iter()
            .find_map(|marker| trimmed.strip_prefix(marker))
            .unwrap_or(trimmed)
            .trim_start();

        // Remove commas (thousand separators)
        let without_commas = without_marker.replace(',', "");

        let value = Decimal::from_str(&without_commas).map_err(AmountError::Parse)?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(value));
        }
        Ok(Amount(value.abs()))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format_num::format_num!(",.2", self.0.to_f64().unwrap_or_default())
        )
    }
}

impl Add for Amount {
    type Output = Amount;

    /// Saturates at `Decimal::MAX` rather than overflowing.
    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Whole numbers are written as integers so that `50` does not become `50.0`.
        let normalized = self.0.normalize();
        if normalized.scale() == 0 {
            if let Some(n) = normalized.to_u64() {
                return serializer.serialize_u64(n);
            }
        }
        serializer.serialize_f64(self.0.to_f64().unwrap_or_default())
    }
}

/// The shapes an amount may take in a persisted file.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = match Option::<RawAmount>::deserialize(deserializer)? {
            None => Amount::ZERO,
            Some(RawAmount::Number(n)) => Decimal::from_f64(n).map(Amount::new).unwrap_or_default(),
            Some(RawAmount::Text(s)) => Amount::lenient(&s),
        };
        Ok(amount)
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
