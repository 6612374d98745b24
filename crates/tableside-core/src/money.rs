//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A running total that is nudged by every add/remove event would drift  │
//! │  under float arithmetic. OUR SOLUTION: integer grosze.                  │
//! │    30.00 PLN = 3000 grosze, and 3000 + 500 is always exactly 3500.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tableside_core::money::Money;
//!
//! // Create from minor units (preferred)
//! let price = Money::from_minor(3000); // 30.00 PLN
//!
//! // Arithmetic operations
//! let total = price + Money::from_minor(500); // 35.00 PLN
//! assert_eq!(total.to_string(), "35.00 PLN");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::CURRENCY_SUFFIX;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (grosze for PLN).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate subtractions may dip negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (grosze).
    ///
    /// ## Example
    /// ```rust
    /// use tableside_core::money::Money;
    ///
    /// let price = Money::from_minor(3000); // Represents 30.00 PLN
    /// assert_eq!(price.minor(), 3000);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units (grosze).
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (złote) portion.
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (grosze) portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
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

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Formats the amount with exactly two decimal places and no unit.
    ///
    /// ## Example
    /// ```rust
    /// use tableside_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(3550).amount_string(), "35.50");
    /// assert_eq!(Money::from_minor(500).amount_string(), "5.00");
    /// ```
    ///
    /// ## Where This Is Used
    /// The cart-total display element shows the bare amount; every other
    /// surface appends [`CURRENCY_SUFFIX`] via [`fmt::Display`].
    pub fn amount_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.major_part().abs(), self.minor_part())
    }

    /// Returns the amount in decimal major units for the JSON wire format.
    ///
    /// The order endpoint carries decimal currency amounts (`30.0`, not
    /// `3000`). This is the ONLY place float money is allowed; all
    /// bookkeeping stays in integer grosze. Exact for any realistic amount
    /// (f64 holds integers up to 2^53).
    #[inline]
    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in the fixed display format.
///
/// ## Note
/// The widget renders a single currency; the " PLN" suffix is part of the
/// display contract, not a localization point.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount_string(), CURRENCY_SUFFIX)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(3099);
        assert_eq!(money.minor(), 3099);
        assert_eq!(money.major_part(), 30);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(3099)), "30.99 PLN");
        assert_eq!(format!("{}", Money::from_minor(500)), "5.00 PLN");
        assert_eq!(format!("{}", Money::from_minor(-550)), "-5.50 PLN");
        assert_eq!(format!("{}", Money::from_minor(0)), "0.00 PLN");
    }

    #[test]
    fn test_amount_string() {
        assert_eq!(Money::from_minor(3000).amount_string(), "30.00");
        assert_eq!(Money::from_minor(5).amount_string(), "0.05");
        assert_eq!(Money::from_minor(-125).amount_string(), "-1.25");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.minor(), 1500);
        acc -= b;
        assert_eq!(acc.minor(), 1000);
    }

    #[test]
    fn test_wire_conversion() {
        assert_eq!(Money::from_minor(3000).as_major_f64(), 30.0);
        assert_eq!(Money::from_minor(2550).as_major_f64(), 25.5);
        assert_eq!(Money::zero().as_major_f64(), 0.0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert_eq!(Money::default(), zero);
        assert_eq!(Money::from_minor(-550).abs().minor(), 550);
    }
}
