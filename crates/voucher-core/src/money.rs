//! # Money Module
//!
//! Provides the `Money` type for handling purchase amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A 10% discount computed in floats can miss by a cent, and a           │
//! │  customer-visible cent is a support ticket.                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    15000 cents - (15000 × 10 / 100) cents = 13500 cents                │
//! │    Every intermediate value is an exact integer                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use voucher_core::money::Money;
//! use voucher_core::types::DiscountPercent;
//!
//! // Create from cents (preferred)
//! let amount = Money::from_cents(15000); // $150.00
//!
//! // Apply a 10% voucher
//! let discounted = amount.apply_discount(DiscountPercent::from_percent(10));
//! assert_eq!(discounted.cents(), 13500); // $135.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::types::DiscountPercent;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Order total ──► apply_voucher(code, amount) ──► discounted total      │
/// │                                                                         │
/// │  EVERY monetary value in the voucher flow goes through this type       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use voucher_core::money::Money;
    ///
    /// let amount = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(amount.cents(), 1099);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The database, calculations, and API all use cents.
    /// Only the UI converts to dollars for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
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

    /// Calculates the discount portion of this amount for a given percentage.
    ///
    /// ## Implementation
    /// Integer math: `amount_cents * percent / 100`, with the division
    /// truncating toward zero. `$1.50 at 33%` is 49 cents, not 49.5 —
    /// the half-cent stays with the merchant.
    ///
    /// ## Example
    /// ```rust
    /// use voucher_core::money::Money;
    /// use voucher_core::types::DiscountPercent;
    ///
    /// let amount = Money::from_cents(15000); // $150.00
    /// let off = amount.discount_amount(DiscountPercent::from_percent(10));
    /// assert_eq!(off.cents(), 1500); // $15.00
    /// ```
    pub fn discount_amount(&self, percent: DiscountPercent) -> Money {
        // Use i128 to prevent overflow on large amounts
        let discount_cents = (self.0 as i128 * percent.percent() as i128) / 100;
        Money::from_cents(discount_cents as i64)
    }

    /// Applies a percentage discount and returns the remaining amount.
    ///
    /// ## Example
    /// ```rust
    /// use voucher_core::money::Money;
    /// use voucher_core::types::DiscountPercent;
    ///
    /// let amount = Money::from_cents(10000); // $100.00
    /// let discounted = amount.apply_discount(DiscountPercent::from_percent(10));
    /// assert_eq!(discounted.cents(), 9000); // $90.00
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Order Total: $150.00
    ///      │
    ///      ▼
    /// apply_discount(10%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Final Total: $135.00
    /// ```
    pub fn apply_discount(&self, percent: DiscountPercent) -> Money {
        *self - self.discount_amount(percent)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
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
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
    }

    #[test]
    fn test_discount_amount_basic() {
        // $150.00 at 10% = $15.00
        let amount = Money::from_cents(15000);
        let off = amount.discount_amount(DiscountPercent::from_percent(10));
        assert_eq!(off.cents(), 1500);
    }

    #[test]
    fn test_apply_discount() {
        let amount = Money::from_cents(15000);
        let discounted = amount.apply_discount(DiscountPercent::from_percent(10));
        assert_eq!(discounted.cents(), 13500);
    }

    #[test]
    fn test_apply_zero_discount_is_identity() {
        let amount = Money::from_cents(1000);
        let discounted = amount.apply_discount(DiscountPercent::zero());
        assert_eq!(discounted, amount);
    }

    #[test]
    fn test_apply_full_discount_is_free() {
        let amount = Money::from_cents(1000);
        let discounted = amount.apply_discount(DiscountPercent::from_percent(100));
        assert!(discounted.is_zero());
    }

    /// Critical test: document the truncation behavior on amounts that
    /// don't divide evenly.
    #[test]
    fn test_discount_truncation_documented() {
        // $1.50 at 33% = 49.5 cents → truncates to 49 cents
        let amount = Money::from_cents(150);
        let off = amount.discount_amount(DiscountPercent::from_percent(33));
        assert_eq!(off.cents(), 49);

        // The customer pays the half-cent: $1.50 - $0.49 = $1.01
        let discounted = amount.apply_discount(DiscountPercent::from_percent(33));
        assert_eq!(discounted.cents(), 101);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_large_amounts_do_not_overflow() {
        // A few billion dollars at 99% stays within i64 thanks to the
        // i128 intermediate
        let amount = Money::from_cents(500_000_000_000);
        let discounted = amount.apply_discount(DiscountPercent::from_percent(99));
        assert_eq!(discounted.cents(), 5_000_000_000);
    }
}
