//! # Validation Module
//!
//! Input validation for quantities, performed at the input boundary
//! before an `Order` exists.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Quantity Prompt                                                    │
//! │                                                                     │
//! │  User enters: "3"                                                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  parse_quantity("3")                                                │
//! │       │                                                             │
//! │       ├── not a number?  → Error: "quantity is not a valid number"  │
//! │       ├── qty <= 0?      → Error: "quantity must be positive"       │
//! │       ├── qty > 999?     → Error: "quantity must be between 1..999" │
//! │       │                                                             │
//! │       └── OK → Order::new proceeds                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because `Order::new` re-validates, an order with a non-positive
//! quantity cannot be constructed even by code that bypasses the prompt.

use crate::error::ValidationError;
use crate::MAX_ORDER_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses and validates raw quantity-prompt input.
///
/// Quantities are whole unit counts. Parse failures are rejected rather
/// than silently accepted.
///
/// ## Example
/// ```rust
/// use bistro_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("3").unwrap(), 3);
/// assert!(parse_quantity("0").is_err());
/// assert!(parse_quantity("abc").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let input = input.trim();

    let quantity: i64 = input.parse().map_err(|_| ValidationError::InvalidNumber {
        field: "quantity",
        input: input.to_string(),
    })?;

    validate_quantity(quantity)?;
    Ok(quantity)
}

/// Validates an already-numeric quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ORDER_QUANTITY (999)
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    if quantity > MAX_ORDER_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity",
            min: 1,
            max: MAX_ORDER_QUANTITY,
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
    fn test_parse_quantity_accepts_whole_counts() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity(" 42 ").unwrap(), 42);
        assert_eq!(parse_quantity("999").unwrap(), 999);
    }

    #[test]
    fn test_parse_quantity_rejects_non_numbers() {
        assert!(matches!(
            parse_quantity("abc"),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("1.5").is_err());
    }

    #[test]
    fn test_parse_quantity_rejects_non_positive() {
        assert!(matches!(
            parse_quantity("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(parse_quantity("-1").is_err());
    }

    #[test]
    fn test_validate_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(matches!(
            validate_quantity(1000),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
