//! Positive order quantity.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The input is not a whole number.
    #[error("quantity must be a whole number")]
    NotANumber,
    /// The value is zero or negative.
    #[error("quantity must be at least 1")]
    TooSmall,
}

/// A cart quantity.
///
/// Always at least 1. Parsing rejects zero, negative, and non-numeric input,
/// so no request carrying an invalid quantity can be constructed.
///
/// ## Examples
///
/// ```
/// use toychest_core::Quantity;
///
/// assert_eq!("3".parse::<Quantity>().unwrap().get(), 3);
/// assert!("0".parse::<Quantity>().is_err());
/// assert!("-1".parse::<Quantity>().is_err());
/// assert!("two".parse::<Quantity>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(u32);

impl Quantity {
    /// A quantity of one (the default when none is given).
    pub const ONE: Self = Self(1);

    /// Create a `Quantity`, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::TooSmall` if `n` is zero.
    pub const fn new(n: u32) -> Result<Self, QuantityError> {
        if n == 0 {
            Err(QuantityError::TooSmall)
        } else {
            Ok(Self(n))
        }
    }

    /// The quantity as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        let n = u32::try_from(n).map_err(|_| QuantityError::TooSmall)?;
        Self::new(n)
    }
}

impl From<Quantity> for i64 {
    fn from(q: Quantity) -> Self {
        Self::from(q.0)
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s.trim().parse().map_err(|_| QuantityError::NotANumber)?;
        Self::try_from(n)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
