//! # Money Module
//!
//! Provides the `Money` type for prices, cart totals and shipping.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    89.9 * 3 = 269.70000000000005  ❌                                    │
//! │    → "$269.70000000000005" in the cart drawer                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    8990 cents * 3 = 26970 cents → "$269.70"                             │
//! │    The free-shipping comparison (>= $500.00) is exact                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use clinivet_core::money::Money;
//!
//! let price = Money::from_cents(8990); // $89.90
//! let line = price * 3u32;             // $269.70
//! assert_eq!(line.to_string(), "$269.70");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences such as "amount left to free shipping"
///   can be computed without underflow surprises
/// - **Single field tuple struct**: serializes as a bare integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use clinivet_core::money::Money;
    ///
    /// let price = Money::from_cents(8990); // $89.90
    /// assert_eq!(price.cents(), 8990);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use clinivet_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(500, 0).cents(), 50_000);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use clinivet_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(4590); // $45.90
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 9180);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Subtracts, clamping the result at zero.
    ///
    /// ## Example
    /// ```rust
    /// use clinivet_core::money::Money;
    ///
    /// let threshold = Money::from_cents(50_000);
    /// assert_eq!(threshold.saturating_sub(Money::from_cents(60_000)), Money::zero());
    /// ```
    #[inline]
    pub fn saturating_sub(self, other: Money) -> Money {
        Money((self.0 - other.0).max(0))
    }

    /// Whole percentage that `self` represents of `whole`, rounded down and
    /// saturating at `u32::MAX`.
    ///
    /// Returns 0 when `whole` is zero or negative.
    ///
    /// ## Example
    /// ```rust
    /// use clinivet_core::money::Money;
    ///
    /// let part = Money::from_cents(12_500);
    /// let whole = Money::from_cents(50_000);
    /// assert_eq!(part.percent_of(whole), 25);
    /// ```
    pub fn percent_of(&self, whole: Money) -> u32 {
        if whole.0 <= 0 || self.0 <= 0 {
            return 0;
        }
        let percent = (i128::from(self.0) * 100) / i128::from(whole.0);
        percent.min(i128::from(u32::MAX)) as u32
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the storefront prints it: `$1234.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(8990);
        assert_eq!(money.cents(), 8990);
        assert_eq!(money.dollars(), 89);
        assert_eq!(money.cents_part(), 90);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(8990).to_string(), "$89.90");
        assert_eq!(Money::from_cents(5_000).to_string(), "$50.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3_u32).cents(), 3000);
        assert_eq!((a * 2_i64).cents(), 2000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 650].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 1000);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_saturating_sub() {
        let threshold = Money::from_cents(50_000);
        assert_eq!(threshold.saturating_sub(Money::from_cents(20_000)).cents(), 30_000);
        assert_eq!(threshold.saturating_sub(threshold), Money::zero());
        assert_eq!(threshold.saturating_sub(Money::from_cents(99_999)), Money::zero());
    }

    #[test]
    fn test_percent_of() {
        let whole = Money::from_cents(50_000);
        assert_eq!(Money::from_cents(49_999).percent_of(whole), 99);
        assert_eq!(Money::from_cents(50_000).percent_of(whole), 100);
        assert_eq!(Money::from_cents(75_000).percent_of(whole), 150);
        assert_eq!(Money::zero().percent_of(whole), 0);
        assert_eq!(whole.percent_of(Money::zero()), 0);
    }

    #[test]
    fn test_percent_of_saturates() {
        let one_cent = Money::from_cents(1);
        assert_eq!(Money::from_cents(100_000_000_000).percent_of(one_cent), u32::MAX);
        assert_eq!(Money::from_cents(i64::MAX).percent_of(one_cent), u32::MAX);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
    }
}
