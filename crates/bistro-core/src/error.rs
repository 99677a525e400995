//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  bistro-core errors (this file)                                     │
//! │  ├── OrderError       - Rejected selections, wraps validation       │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  Terminal app errors (separate crate)                               │
//! │  └── SessionError     - Core errors + console I/O failures          │
//! │                                                                     │
//! │  Flow: ValidationError → OrderError → SessionError → exit code      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in error messages
//! 3. Errors are enum variants, never String
//! 4. Selection errors are fatal to the session: no retry, no recovery

use thiserror::Error;

// =============================================================================
// Order Error
// =============================================================================

/// Errors raised while collecting and assembling an order.
///
/// A selection error means the user entered a code outside the accepted
/// set. It is detected at the input boundary and ends the session with no
/// order constructed and no payment invoked.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Menu code outside the accepted set {1, 2, 3}.
    #[error("unrecognized menu selection: {input}")]
    InvalidMenuSelection { input: String },

    /// Payment code outside the accepted set {1, 2}.
    #[error("unrecognized payment selection: {input}")]
    InvalidPaymentSelection { input: String },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before an `Order` is ever constructed.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Input could not be parsed as a number.
    #[error("{field} is not a valid number: {input}")]
    InvalidNumber { field: &'static str, input: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = OrderError::InvalidMenuSelection {
            input: "5".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognized menu selection: 5");

        let err = OrderError::InvalidPaymentSelection {
            input: "9".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognized payment selection: 9");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive { field: "quantity" };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::InvalidNumber {
            field: "quantity",
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "quantity is not a valid number: abc");
    }

    #[test]
    fn test_validation_converts_to_order_error() {
        let validation_err = ValidationError::MustBePositive { field: "quantity" };
        let order_err: OrderError = validation_err.into();
        assert!(matches!(order_err, OrderError::Validation(_)));
    }
}
