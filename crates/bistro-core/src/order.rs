//! # Order Module
//!
//! The immutable `Order` value and the fixed workflow that processes it.
//!
//! ## Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Order Processing Workflow                          │
//! │                                                                     │
//! │  SelectItem ──► CustomizeMeal ──► Pay ──► ConfirmOrder              │
//! │                                                                     │
//! │  SelectItem:     emit "Item selected: <description>"                │
//! │  CustomizeMeal:  emit "Final customizations applied."               │
//! │                  (add-ons were applied at selection time, so this   │
//! │                  stage is notification-only)                        │
//! │  Pay:            total = meal.total_price(qty)                      │
//! │                  emit "Processing payment..."                       │
//! │                  invoke method.pay(total), emit its record line     │
//! │  ConfirmOrder:   recompute total, emit confirmation + thanks        │
//! │                                                                     │
//! │  Transitions are unconditional and sequential. No stage can fail,   │
//! │  and the workflow cannot be re-entered, paused, or rolled back.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The stage sequence is an explicit ordered list ([`WORKFLOW`]) executed
//! by a driver ([`Order::process`]), not a trait hierarchy: only one
//! concrete workflow exists.

use serde::{Deserialize, Serialize};

use crate::error::OrderResult;
use crate::menu::Meal;
use crate::money::Money;
use crate::payment::{PaymentMethod, PaymentRecord};
use crate::validation::validate_quantity;

// =============================================================================
// Order
// =============================================================================

/// A finalized selection: meal, payment method, and quantity.
///
/// Created once all selections are validated; immutable thereafter;
/// consumed by [`Order::process`] and discarded after confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    meal: Meal,
    payment_method: PaymentMethod,
    quantity: i64,
}

impl Order {
    /// Assembles an order, validating the quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::menu::{Meal, MenuItem};
    /// use bistro_core::order::Order;
    /// use bistro_core::payment::PaymentMethod;
    ///
    /// let order = Order::new(
    ///     Meal::new(MenuItem::Salad),
    ///     PaymentMethod::CreditCard,
    ///     3,
    /// ).unwrap();
    /// assert_eq!(order.total().cents(), 1500);
    /// ```
    pub fn new(meal: Meal, payment_method: PaymentMethod, quantity: i64) -> OrderResult<Self> {
        validate_quantity(quantity)?;
        Ok(Order {
            meal,
            payment_method,
            quantity,
        })
    }

    /// The meal being ordered.
    pub fn meal(&self) -> &Meal {
        &self.meal
    }

    /// The chosen payment method.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Units ordered. Always positive.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Order total: `quantity × unit price`, recomputed on every call.
    pub fn total(&self) -> Money {
        self.meal.total_price(self.quantity)
    }

    /// Runs the fixed workflow over this order, consuming it.
    ///
    /// Drives the [`WORKFLOW`] stages in sequence and collects every
    /// line a stage emits. The payment is invoked exactly once, during
    /// the `Pay` stage.
    pub fn process(self) -> OrderOutcome {
        let mut lines = Vec::new();
        let mut payment = None;

        for stage in WORKFLOW {
            match stage {
                WorkflowStage::SelectItem => {
                    lines.push(format!("Item selected: {}", self.meal.description()));
                }
                WorkflowStage::CustomizeMeal => {
                    // Add-ons were already applied when the meal was
                    // assembled; this stage only acknowledges them.
                    lines.push("Final customizations applied.".to_string());
                }
                WorkflowStage::Pay => {
                    let total = self.total();
                    lines.push("Processing payment...".to_string());
                    let record = self.payment_method.pay(total);
                    lines.push(record.to_string());
                    payment = Some(record);
                }
                WorkflowStage::ConfirmOrder => {
                    lines.push(format!("Order confirmed. Total paid: {}", self.total()));
                    lines.push("Thank you!".to_string());
                }
            }
        }

        OrderOutcome {
            payment: payment.expect("WORKFLOW always contains the Pay stage"),
            lines,
        }
    }
}

// =============================================================================
// Workflow Stages
// =============================================================================

/// One step of the fixed select → customize → pay → confirm sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    SelectItem,
    CustomizeMeal,
    Pay,
    ConfirmOrder,
}

/// The fixed stage sequence. Strict, non-branching, no cycles.
pub const WORKFLOW: [WorkflowStage; 4] = [
    WorkflowStage::SelectItem,
    WorkflowStage::CustomizeMeal,
    WorkflowStage::Pay,
    WorkflowStage::ConfirmOrder,
];

// =============================================================================
// Order Outcome
// =============================================================================

/// Everything a completed workflow run produced: the emitted lines in
/// order, and the single payment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutcome {
    /// Lines emitted by the stages, in emission order.
    pub lines: Vec<String>,
    /// The payment made during the `Pay` stage.
    pub payment: PaymentRecord,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{OrderError, ValidationError};
    use crate::menu::{AddOn, MenuItem};

    #[test]
    fn test_order_rejects_non_positive_quantity() {
        let err = Order::new(Meal::new(MenuItem::Pizza), PaymentMethod::PayPal, 0)
            .expect_err("zero quantity must be rejected");
        assert!(matches!(
            err,
            OrderError::Validation(ValidationError::MustBePositive { .. })
        ));
        assert!(Order::new(Meal::new(MenuItem::Pizza), PaymentMethod::PayPal, -2).is_err());
    }

    #[test]
    fn test_pizza_no_add_on_quantity_two() {
        let order = Order::new(Meal::new(MenuItem::Pizza), PaymentMethod::PayPal, 2).unwrap();
        assert_eq!(order.meal().unit_price().cents(), 425);
        assert_eq!(order.total().cents(), 850);
    }

    #[test]
    fn test_burger_extra_cheese_quantity_one() {
        let meal = Meal::new(MenuItem::Burger).with_add_on(AddOn::ExtraCheese);
        let order = Order::new(meal, PaymentMethod::PayPal, 1).unwrap();
        assert_eq!(order.meal().unit_price().cents(), 1100);
        assert_eq!(order.meal().description(), "Burger + Extra Cheese");
        assert_eq!(order.total().cents(), 1100);
    }

    #[test]
    fn test_salad_quantity_three_credit_card() {
        let order = Order::new(Meal::new(MenuItem::Salad), PaymentMethod::CreditCard, 3).unwrap();
        assert_eq!(order.total().cents(), 1500);
        assert_eq!(order.payment_method().label(), "Credit Card");

        let outcome = order.process();
        // Exactly one payment, for the full total
        assert_eq!(outcome.payment.amount.cents(), 1500);
        assert_eq!(outcome.payment.method, PaymentMethod::CreditCard);
    }

    #[test]
    fn test_workflow_emits_stage_lines_in_order() {
        let order = Order::new(Meal::new(MenuItem::Pizza), PaymentMethod::PayPal, 2).unwrap();
        let outcome = order.process();

        assert_eq!(
            outcome.lines,
            vec![
                "Item selected: Pizza".to_string(),
                "Final customizations applied.".to_string(),
                "Processing payment...".to_string(),
                "Paid $8.50 using PayPal.".to_string(),
                "Order confirmed. Total paid: $8.50".to_string(),
                "Thank you!".to_string(),
            ]
        );
    }

    #[test]
    fn test_workflow_stage_sequence_is_fixed() {
        assert_eq!(WORKFLOW.len(), 4);
        assert_eq!(WORKFLOW[0], WorkflowStage::SelectItem);
        assert_eq!(WORKFLOW[3], WorkflowStage::ConfirmOrder);
    }

    #[test]
    fn test_confirmation_recomputes_total_with_add_ons() {
        let meal = Meal::new(MenuItem::Burger)
            .with_add_on(AddOn::ExtraCheese)
            .with_add_on(AddOn::Sauce);
        let order = Order::new(meal, PaymentMethod::CreditCard, 2).unwrap();
        let outcome = order.process();

        // (1000 + 100 + 50) * 2 = 2300
        assert_eq!(outcome.payment.amount.cents(), 2300);
        assert!(outcome
            .lines
            .contains(&"Order confirmed. Total paid: $23.00".to_string()));
    }
}
