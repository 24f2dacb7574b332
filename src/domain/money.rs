use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Represents a monetary value with exact decimal arithmetic.
///
/// This is a wrapper around `rust_decimal::Decimal` to provide type safety
/// for credit and pricing calculations. Values stay exact internally; they
/// are rounded to two decimal places only when formatted for output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Line-item extension: unit price × quantity.
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.round_dp(2))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(10.00));
        let b = Money::new(dec!(2.50));
        assert_eq!(a + b, Money::new(dec!(12.50)));
        assert_eq!(a - b, Money::new(dec!(7.50)));
    }

    #[test]
    fn test_times_is_exact() {
        let price = Money::new(dec!(10.00));
        assert_eq!(price.times(3), Money::new(dec!(30.00)));
        let odd = Money::new(dec!(0.15));
        assert_eq!(odd.times(7), Money::new(dec!(1.05)));
    }

    #[test]
    fn test_display_rounds_to_two_decimals() {
        assert_eq!(Money::new(dec!(12.345)).to_string(), "12.35");
        assert_eq!(Money::new(dec!(7)).to_string(), "7");
    }

    #[test]
    fn test_signs() {
        assert!(Money::new(dec!(0.01)).is_positive());
        assert!(Money::new(dec!(-0.01)).is_negative());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
    }
}
