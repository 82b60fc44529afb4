//! # Validation Module
//!
//! Input validation utilities for the voucher service.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: API middleware (external collaborator)                       │
//! │  ├── Request shape checks (missing body, wrong JSON types)             │
//! │  └── Immediate caller feedback                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  ├── Code shape and length                                             │
//! │  └── Discount and amount ranges                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE index on code                                              │
//! │  └── CHECK on discount range                                           │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use voucher_core::validation::{validate_voucher_code, validate_discount_percent};
//!
//! // Validate a code before touching the store
//! validate_voucher_code("WELCOME10").unwrap();
//!
//! // Validate a discount before creating a voucher
//! validate_discount_percent(10).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_CODE_LENGTH, MAX_DISCOUNT_PERCENT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a voucher code.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Must contain only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use voucher_core::validation::validate_voucher_code;
///
/// assert!(validate_voucher_code("WELCOME10").is_ok());
/// assert!(validate_voucher_code("").is_err());
/// assert!(validate_voucher_code("has space").is_err());
/// ```
pub fn validate_voucher_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LENGTH,
        });
    }

    // Check for valid characters (alphanumeric, hyphen, underscore)
    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
/// - Zero is allowed (a tracking-only voucher that changes no price)
///
/// ## Example
/// ```rust
/// use voucher_core::validation::validate_discount_percent;
///
/// assert!(validate_discount_percent(0).is_ok());
/// assert!(validate_discount_percent(100).is_ok());
/// assert!(validate_discount_percent(101).is_err());
/// ```
pub fn validate_discount_percent(percent: u8) -> ValidationResult<()> {
    if percent > MAX_DISCOUNT_PERCENT {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: MAX_DISCOUNT_PERCENT as i64,
        });
    }

    Ok(())
}

/// Validates a purchase amount in cents.
///
/// ## Rules
/// - Must be positive (> 0)
/// - A zero or negative purchase has no total to discount
pub fn validate_amount_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_voucher_code() {
        // Valid codes
        assert!(validate_voucher_code("WELCOME10").is_ok());
        assert!(validate_voucher_code("SUMMER-SALE").is_ok());
        assert!(validate_voucher_code("vip_2026").is_ok());

        // Invalid codes
        assert!(validate_voucher_code("").is_err());
        assert!(validate_voucher_code("   ").is_err());
        assert!(validate_voucher_code("has space").is_err());
        assert!(validate_voucher_code("50%OFF").is_err());
        assert!(validate_voucher_code(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(0).is_ok());
        assert!(validate_discount_percent(10).is_ok());
        assert!(validate_discount_percent(100).is_ok());

        assert!(validate_discount_percent(101).is_err());
        assert!(validate_discount_percent(255).is_err());
    }

    #[test]
    fn test_validate_amount_cents() {
        assert!(validate_amount_cents(1).is_ok());
        assert!(validate_amount_cents(15000).is_ok());

        assert!(validate_amount_cents(0).is_err());
        assert!(validate_amount_cents(-100).is_err());
    }
}
