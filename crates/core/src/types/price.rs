//! Type-safe price representation using decimal arithmetic.
//!
//! The backend serializes prices as plain JSON numbers (e.g. `9.99`), so
//! `Price` is a transparent wrapper around [`Decimal`] and relies on
//! `rust_decimal`'s float serde support for the wire format.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Quantity;

/// A price in the store currency (US dollars).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The price of `quantity` units at this unit price.
    #[must_use]
    pub fn line_total(&self, quantity: Quantity) -> Self {
        Self(self.0 * Decimal::from(quantity.get()))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Display as `$X.XX`, rounded to two decimal places.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0.round_dp(2))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Price {
        Price::new(Decimal::new(cents, 2))
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(price(999).to_string(), "$9.99");
        assert_eq!(price(1500).to_string(), "$15.00");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_line_total() {
        let qty = Quantity::new(3).unwrap();
        assert_eq!(price(999).line_total(qty), price(2997));
    }

    #[test]
    fn test_sum() {
        let total: Price = [price(999), price(1500), price(1)].into_iter().sum();
        assert_eq!(total, price(2500));
    }

    #[test]
    fn test_deserialize_from_json_number() {
        let p: Price = serde_json::from_str("9.99").unwrap();
        assert_eq!(p, price(999));
    }
}
