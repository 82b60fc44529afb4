//! # Error Types
//!
//! Domain-specific error types for voucher-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  voucher-core errors (this file)                                       │
//! │  ├── CoreError        - Domain errors (Conflict, Store)                │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  voucher-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ← DbError (via From, in voucher-db) │
//! │                             │                                           │
//! │                             ▼                                           │
//! │         API layer decides the user-visible response (HTTP 409, …)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (code, field, etc.)
//! 3. Errors are enum variants, never bare Strings at call sites
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly responses by the
/// embedding API layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A precondition on uniqueness or existence failed.
    ///
    /// ## When This Occurs
    /// - Creating a voucher whose code is already taken
    /// - Applying a voucher whose code does not exist
    ///
    /// ## User Workflow
    /// ```text
    /// create_voucher("WELCOME10", 10)
    ///      │
    ///      ▼
    /// Store lookup finds "WELCOME10"
    ///      │
    ///      ▼
    /// Conflict { message: "Voucher already exist." }
    ///      │
    ///      ▼
    /// API layer answers 409 Conflict
    /// ```
    #[error("{message}")]
    Conflict { message: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The voucher store failed for infrastructure reasons.
    ///
    /// ## When This Occurs
    /// - The database is unreachable or a query fails
    /// - Never raised by the core itself; it only flows through the
    ///   `VoucherStore` seam from a concrete implementation
    #[error("Voucher store error: {0}")]
    Store(String),
}

impl CoreError {
    /// Creates a Conflict error with the given message.
    pub fn conflict(message: impl Into<String>) -> Self {
        CoreError::Conflict {
            message: message.into(),
        }
    }

    /// Checks whether this error is a Conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, CoreError::Conflict { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., disallowed characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_passthrough() {
        let err = CoreError::conflict("Voucher already exist.");
        assert_eq!(err.to_string(), "Voucher already exist.");
        assert!(err.is_conflict());
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "discount must be between 0 and 100");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "code".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(!core_err.is_conflict());
    }
}
