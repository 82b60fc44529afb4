//! # Domain Types
//!
//! Core domain types for the voucher service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────────┐  │
//! │  │    Voucher      │   │ DiscountPercent  │   │  VoucherRedemption  │  │
//! │  │  ─────────────  │   │  ──────────────  │   │  ─────────────────  │  │
//! │  │  id (UUID)      │   │  0..=100         │   │  amount_cents       │  │
//! │  │  code (business)│   │  10 = 10% off    │   │  discount_percent   │  │
//! │  │  discount       │   └──────────────────┘   │  final_amount_cents │  │
//! │  │  used           │                          │  applied            │  │
//! │  └─────────────────┘                          └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every voucher has:
//! - `id`: UUID v4 - immutable, assigned by the store, used for relations
//! - `code`: business key - human-readable, unique, what customers type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Percent
// =============================================================================

/// A whole-number percentage discount in the range 0-100.
///
/// ## Why a Newtype?
/// A bare `u8` invites confusion with basis points or fractions.
/// `DiscountPercent(10)` always means "10% off", nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// Creates a discount from a whole percentage.
    ///
    /// Range enforcement happens at the validation layer
    /// ([`crate::validation::validate_discount_percent`]); this constructor
    /// stays `const` and infallible like the rest of the type.
    #[inline]
    pub const fn from_percent(percent: u8) -> Self {
        DiscountPercent(percent)
    }

    /// Returns the discount as a whole percentage.
    #[inline]
    pub const fn percent(&self) -> u8 {
        self.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountPercent(0)
    }

    /// Checks if the discount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountPercent {
    fn default() -> Self {
        DiscountPercent::zero()
    }
}

// =============================================================================
// Voucher
// =============================================================================

/// A discount code record.
///
/// Created once, mutated exactly once (`used: false → true`) upon
/// successful application, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Voucher {
    /// Unique identifier (UUID v4), assigned by the store.
    pub id: String,

    /// Discount code - business identifier, unique across all vouchers.
    pub code: String,

    /// Percentage discount (0-100).
    pub discount_percent: u8,

    /// Whether the voucher has been redeemed.
    pub used: bool,

    /// When the voucher was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the voucher was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Voucher {
    /// Returns the discount as a typed percentage.
    #[inline]
    pub fn discount(&self) -> DiscountPercent {
        DiscountPercent::from_percent(self.discount_percent)
    }
}

// =============================================================================
// Voucher Redemption
// =============================================================================

/// The outcome of applying a voucher to a purchase amount.
///
/// Returned whether or not the discount actually took effect: when the
/// amount is below the redeemable minimum, `applied` is `false` and
/// `final_amount_cents` still reflects the discount formula so the caller
/// can show the customer what they are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VoucherRedemption {
    /// The original purchase amount in cents.
    pub amount_cents: i64,

    /// Percentage discount of the voucher (0-100).
    pub discount_percent: u8,

    /// `amount - (amount × discount / 100)` in cents.
    pub final_amount_cents: i64,

    /// Whether the voucher was actually consumed.
    pub applied: bool,
}

impl VoucherRedemption {
    /// Returns the original amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }

    /// Returns the discounted amount as Money.
    #[inline]
    pub fn final_amount(&self) -> Money {
        Money::from_cents(self.final_amount_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_percent_roundtrip() {
        let discount = DiscountPercent::from_percent(10);
        assert_eq!(discount.percent(), 10);
        assert!(!discount.is_zero());
    }

    #[test]
    fn test_discount_percent_default() {
        let discount = DiscountPercent::default();
        assert!(discount.is_zero());
    }

    #[test]
    fn test_voucher_discount_accessor() {
        let now = Utc::now();
        let voucher = Voucher {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            code: "WELCOME10".to_string(),
            discount_percent: 10,
            used: false,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(voucher.discount(), DiscountPercent::from_percent(10));
    }

    #[test]
    fn test_redemption_money_accessors() {
        let redemption = VoucherRedemption {
            amount_cents: 15000,
            discount_percent: 10,
            final_amount_cents: 13500,
            applied: true,
        };

        assert_eq!(redemption.amount(), Money::from_cents(15000));
        assert_eq!(redemption.final_amount(), Money::from_cents(13500));
    }

    /// The redemption struct is an API payload; pin its JSON field names.
    #[test]
    fn test_redemption_json_shape() {
        let redemption = VoucherRedemption {
            amount_cents: 150,
            discount_percent: 10,
            final_amount_cents: 135,
            applied: true,
        };

        let json = serde_json::to_value(redemption).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "amount_cents": 150,
                "discount_percent": 10,
                "final_amount_cents": 135,
                "applied": true,
            })
        );
    }
}
