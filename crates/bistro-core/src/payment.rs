//! # Payment Module
//!
//! Payment methods and the record a simulated payment produces.
//!
//! Payments in this system always succeed: there is no decline or
//! failure modeling. `pay` therefore returns a `PaymentRecord` rather
//! than a `Result`, and the record doubles as the user-visible
//! confirmation line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{OrderError, OrderResult};
use crate::money::Money;

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays.
///
/// Stateless, with no persisted identity: selecting "Credit Card" twice
/// yields indistinguishable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
}

impl PaymentMethod {
    /// All methods, in payment-code order. Used to render the payment menu.
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::CreditCard, PaymentMethod::PayPal];

    /// Fixed label identifying the method on receipts and confirmations.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
        }
    }

    /// The one-based code the payment prompt accepts for this method.
    pub const fn menu_code(&self) -> u32 {
        match self {
            PaymentMethod::CreditCard => 1,
            PaymentMethod::PayPal => 2,
        }
    }

    /// Resolves raw payment-prompt input to a method.
    ///
    /// Accepted inputs are the codes {1, 2}. Anything else is an invalid
    /// selection and fatal to the session: the item stays selected, but
    /// no payment runs and no order is created.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::payment::PaymentMethod;
    ///
    /// assert_eq!(
    ///     PaymentMethod::from_menu_input("1").unwrap(),
    ///     PaymentMethod::CreditCard
    /// );
    /// assert!(PaymentMethod::from_menu_input("9").is_err());
    /// ```
    pub fn from_menu_input(input: &str) -> OrderResult<Self> {
        match input.trim() {
            "1" => Ok(PaymentMethod::CreditCard),
            "2" => Ok(PaymentMethod::PayPal),
            other => Err(OrderError::InvalidPaymentSelection {
                input: other.to_string(),
            }),
        }
    }

    /// Performs the simulated payment and returns its record.
    ///
    /// Always succeeds. The amount is expected to be non-negative; the
    /// session guarantees this by validating the quantity before an
    /// order is ever constructed.
    pub fn pay(&self, amount: Money) -> PaymentRecord {
        PaymentRecord {
            method: *self,
            amount,
            paid_at: Utc::now(),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Payment Record
// =============================================================================

/// The confirmation record a completed payment emits.
///
/// Uses the snapshot pattern: amount and method are frozen at payment
/// time, so the record stays valid after the order is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// The method that was charged.
    pub method: PaymentMethod,
    /// Amount paid.
    pub amount: Money,
    /// When the payment was made.
    pub paid_at: DateTime<Utc>,
}

/// Display renders the workflow confirmation line, e.g.
/// `Paid $15.00 using Credit Card.`
impl fmt::Display for PaymentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paid {} using {}.", self.amount, self.method.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(PaymentMethod::CreditCard.label(), "Credit Card");
        assert_eq!(PaymentMethod::PayPal.label(), "PayPal");
    }

    #[test]
    fn test_from_menu_input() {
        assert_eq!(
            PaymentMethod::from_menu_input("1").unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!(
            PaymentMethod::from_menu_input("2").unwrap(),
            PaymentMethod::PayPal
        );
    }

    #[test]
    fn test_from_menu_input_rejects_unknown_codes() {
        assert!(matches!(
            PaymentMethod::from_menu_input("9"),
            Err(OrderError::InvalidPaymentSelection { .. })
        ));
        assert!(PaymentMethod::from_menu_input("0").is_err());
        assert!(PaymentMethod::from_menu_input("card").is_err());
        assert!(PaymentMethod::from_menu_input("").is_err());
    }

    #[test]
    fn test_pay_records_amount_and_method() {
        let record = PaymentMethod::PayPal.pay(Money::from_cents(850));
        assert_eq!(record.method, PaymentMethod::PayPal);
        assert_eq!(record.amount.cents(), 850);
    }

    #[test]
    fn test_payment_record_confirmation_line() {
        let record = PaymentMethod::CreditCard.pay(Money::from_cents(1500));
        assert_eq!(record.to_string(), "Paid $15.00 using Credit Card.");
    }
}
