//! Money type and the amount normalizer
//!
//! Amounts are held in cents (i64) so sums never drift. On the wire they are
//! plain decimal numbers (`5000`, `12.5`), which keeps the persisted layout
//! readable by anything that speaks JSON numbers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Round a monetary value to 2 decimal places.
///
/// Non-finite input (NaN, ±infinity) maps to exactly 0. Finite input is rounded
/// half away from zero at the hundredths boundary. Applying it twice gives the
/// same result as applying it once.
///
/// ```
/// use moneyio::models::money::normalize;
/// assert_eq!(normalize(10.126), 10.13);
/// assert_eq!(normalize(-0.125), -0.13);
/// assert_eq!(normalize(f64::NAN), 0.0);
/// ```
pub fn normalize(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        // Far beyond cent resolution already.
        return value;
    }
    scaled.round() / 100.0
}

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude, in cents, that `from_decimal` produces.
    ///
    /// Every amount within this bound survives the decimal JSON form
    /// unchanged.
    pub const MAX_CENTS: i64 = 999_999_999_999_999;

    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a decimal value, normalizing it first.
    ///
    /// Non-finite values become zero; out-of-range values saturate at
    /// `±MAX_CENTS`.
    pub fn from_decimal(value: f64) -> Self {
        if !value.is_finite() {
            return Self::zero();
        }
        let bound = Self::MAX_CENTS as f64;
        Self((value * 100.0).round().clamp(-bound, bound) as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal number with at most 2 fractional digits
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.units().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }

    /// Plain `1234.50` rendering, used by exports
    pub fn format_plain(&self) -> String {
        self.format_with_symbol("")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.to_decimal())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Self::from_decimal(value))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_at_most_two_decimals(value: f64) -> bool {
        let scaled = value * 100.0;
        (scaled - scaled.round()).abs() < 1e-4
    }

    #[test]
    fn test_normalize_rounds_to_cents() {
        assert_eq!(normalize(10.126), 10.13);
        assert_eq!(normalize(10.124), 10.12);
        assert_eq!(normalize(0.125), 0.13);
        assert_eq!(normalize(-0.125), -0.13);
        assert_eq!(normalize(5000.0), 5000.0);
    }

    #[test]
    fn test_normalize_non_finite_is_zero() {
        assert_eq!(normalize(f64::NAN), 0.0);
        assert_eq!(normalize(f64::INFINITY), 0.0);
        assert_eq!(normalize(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = [
            0.0, 0.1, 0.2, 0.3, 1.005, 2.675, 19.999, -7.345, 1234.5678, 1e9 + 0.015,
            -0.004, 99.995, 1e15,
        ];
        for x in samples {
            let once = normalize(x);
            assert_eq!(normalize(once), once, "not idempotent for {}", x);
            assert!(has_at_most_two_decimals(once), "too many decimals for {}", x);
        }
    }

    #[test]
    fn test_normalize_huge_finite_stays_finite() {
        assert!(normalize(f64::MAX).is_finite());
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(10.5).cents(), 1050);
        assert_eq!(Money::from_decimal(0.125).cents(), 13);
        assert_eq!(Money::from_decimal(f64::NAN), Money::zero());
        assert_eq!(Money::from_decimal(f64::INFINITY), Money::zero());
        assert_eq!(Money::from_decimal(1e300).cents(), Money::MAX_CENTS);
        assert_eq!(Money::from_decimal(-1e300).cents(), -Money::MAX_CENTS);
    }

    #[test]
    fn test_saturated_amounts_survive_json() {
        let samples = [
            Money::from_decimal(1e300),
            Money::from_decimal(-1e300),
            Money::from_cents(Money::MAX_CENTS - 1),
            Money::from_cents(Money::MAX_CENTS - 99),
        ];
        for money in samples {
            let json = serde_json::to_string(&money).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, money, "{json}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(Money::from_cents(345000).format_plain(), "3450.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
        assert_eq!(Money::from_cents(-300).abs().cents(), 300);
    }

    #[test]
    fn test_sum() {
        let total: Money = [10, 20, 70]
            .iter()
            .map(|c| Money::from_cents(*c))
            .sum();
        assert_eq!(total.cents(), 100);
    }

    #[test]
    fn test_serialization_as_decimal_number() {
        assert_eq!(serde_json::to_string(&Money::from_cents(500000)).unwrap(), "5000");
        assert_eq!(serde_json::to_string(&Money::from_cents(1250)).unwrap(), "12.5");

        let m: Money = serde_json::from_str("12.346").unwrap();
        assert_eq!(m.cents(), 1235);
        let m: Money = serde_json::from_str("350").unwrap();
        assert_eq!(m.cents(), 35000);
        assert!(serde_json::from_str::<Money>("\"12\"").is_err());
    }
}
