use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A monetary value in minor currency units (cents).
///
/// Wraps a `u32` so balances and prices can never go negative. Callers compare
/// with `>=` before subtracting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Cents(pub u32);

impl Cents {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Adds `rhs`, returning `None` if the sum does not fit in a `u32`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Converts to a two-decimal major-unit amount, e.g. `35` cents to `0.35`.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.to_decimal())
    }
}

impl Add for Cents {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Cents {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Cents {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cents_arithmetic() {
        let a = Cents::new(25);
        let b = Cents::new(10);
        assert_eq!(a + b, Cents::new(35));
        assert_eq!(a - b, Cents::new(15));

        let mut c = Cents::ZERO;
        c += a;
        c -= b;
        assert_eq!(c, Cents::new(15));
    }

    #[test]
    fn test_cents_checked_add() {
        assert_eq!(Cents(10).checked_add(Cents(5)), Some(Cents(15)));
        assert_eq!(Cents(u32::MAX).checked_add(Cents(1)), None);
    }

    #[test]
    fn test_cents_sum() {
        let total: Cents = [5, 10, 25].into_iter().map(Cents::new).sum();
        assert_eq!(total, Cents::new(40));
    }

    #[test]
    fn test_cents_display_as_dollars() {
        assert_eq!(Cents::new(35).to_decimal(), dec!(0.35));
        assert_eq!(Cents::new(100).to_decimal(), dec!(1.00));
        assert_eq!(Cents::new(35).to_string(), "$0.35");
        assert_eq!(Cents::new(150).to_string(), "$1.50");
    }
}
