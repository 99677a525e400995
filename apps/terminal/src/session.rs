//! # Console Session
//!
//! Drives one order from prompt to receipt.
//!
//! ## Session Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Console Session Flow                           │
//! │                                                                     │
//! │  Welcome banner                                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Menu prompt (1/2/3) ────── bad code ──► "Invalid option." + exit   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Add-on prompts (yes/no per add-on; anything else = no)             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Quantity prompt ────────── bad number ─► "Invalid quantity." +exit │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Payment prompt (1/2) ───── bad code ──► "Invalid payment." + exit  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Receipt block, then the four workflow stages                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is generic over its reader and writer so the whole
//! protocol can be exercised in tests with in-memory buffers.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use bistro_core::validation::parse_quantity;
use bistro_core::{AddOn, Meal, MenuItem, Order, OrderError, PaymentMethod, Receipt};

use crate::error::SessionError;

/// A single interactive ordering session.
///
/// Each session is one linear transaction: collect inputs, print the
/// receipt, run the workflow. It cannot be re-entered or rolled back.
pub struct Session<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given reader and writer.
    pub fn new(input: R, out: W) -> Self {
        Session { input, out }
    }

    /// Runs the full session and returns the receipt on success.
    ///
    /// Early-termination paths: an unrecognized menu code, an invalid
    /// quantity, or an unrecognized payment code. Each prints a message
    /// and returns the error with no order constructed and no payment
    /// invoked.
    pub fn run(&mut self) -> Result<Receipt, SessionError> {
        writeln!(self.out, "Welcome to the Bistro Order Terminal")?;

        // Step 1: select the base item
        writeln!(self.out, "Select your meal:")?;
        for item in MenuItem::ALL {
            writeln!(self.out, "\t{} - {}", item.menu_code(), item.name())?;
        }
        let answer = self.prompt("Enter your option: ")?;
        let base = match MenuItem::from_menu_input(&answer) {
            Ok(item) => item,
            Err(err) => return self.abort("Invalid option. Exiting.", err),
        };
        debug!(item = base.name(), "meal selected");

        // Step 2: customize with add-ons (applied now, acknowledged by
        // the workflow's CustomizeMeal stage later)
        let mut meal = Meal::new(base);
        for add_on in AddOn::ALL {
            let answer = self.prompt(&format!("Add {}? (yes/no): ", add_on.suffix()))?;
            if answer.eq_ignore_ascii_case("yes") {
                meal = meal.with_add_on(add_on);
                debug!(add_on = add_on.suffix(), "add-on applied");
            }
        }

        // Step 3: quantity
        let answer = self.prompt("Enter quantity: ")?;
        let quantity = match parse_quantity(&answer) {
            Ok(quantity) => quantity,
            Err(err) => return self.abort("Invalid quantity. Exiting.", err.into()),
        };

        // Step 4: payment method
        writeln!(self.out, "Choose Payment Method:")?;
        for method in PaymentMethod::ALL {
            writeln!(self.out, "\t{} - {}", method.menu_code(), method.label())?;
        }
        let answer = self.prompt("Enter option: ")?;
        let method = match PaymentMethod::from_menu_input(&answer) {
            Ok(method) => method,
            Err(err) => return self.abort("Invalid payment method. Exiting.", err),
        };

        // Selections finalized: assemble the immutable order
        let order = Order::new(meal, method, quantity)?;
        let receipt = Receipt::for_order(&order);

        writeln!(self.out)?;
        writeln!(self.out, "{receipt}")?;

        // Run the fixed workflow and print every stage line
        let outcome = order.process();
        for line in &outcome.lines {
            writeln!(self.out, "{line}")?;
        }

        info!(
            receipt_number = %receipt.receipt_number,
            total_cents = outcome.payment.amount.cents(),
            method = outcome.payment.method.label(),
            "order completed"
        );
        Ok(receipt)
    }

    /// Writes a prompt (no trailing newline) and reads the answer.
    fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(self.read_line()?)
    }

    /// Reads one trimmed line, treating a closed stream as an error.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed mid-session",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Prints a user-facing message and ends the session with `err`.
    fn abort<T>(&mut self, message: &str, err: OrderError) -> Result<T, SessionError> {
        writeln!(self.out, "{message}")?;
        Err(err.into())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs a session over scripted input, returning the result and the
    /// full output transcript.
    fn run_script(input: &str) -> (Result<Receipt, SessionError>, String) {
        let mut out = Vec::new();
        let result = Session::new(input.as_bytes(), &mut out).run();
        (result, String::from_utf8(out).expect("output is UTF-8"))
    }

    #[test]
    fn test_success_path_pizza_no_add_ons() {
        // Pizza, no cheese, no sauce, qty 2, PayPal
        let (result, transcript) = run_script("1\nno\nno\n2\n2\n");
        let receipt = result.unwrap();

        assert_eq!(receipt.item, "Pizza");
        assert_eq!(receipt.quantity, 2);
        assert_eq!(receipt.unit_price_cents, 425);
        assert_eq!(receipt.total_cents, 850);
        assert_eq!(receipt.payment_method, "PayPal");

        assert!(transcript.contains("Welcome to the Bistro Order Terminal"));
        assert!(transcript.contains("\t1 - Pizza"));
        assert!(transcript.contains("Add Extra Cheese? (yes/no): "));
        assert!(transcript.contains("Add Sauce? (yes/no): "));
        assert!(transcript.contains("------ RECEIPT ------"));
        assert!(transcript.contains("Total Price: $8.50"));
        assert!(transcript.contains("Item selected: Pizza"));
        assert!(transcript.contains("Paid $8.50 using PayPal."));
        assert!(transcript.contains("Order confirmed. Total paid: $8.50"));
        assert!(transcript.contains("Thank you!"));
    }

    #[test]
    fn test_success_path_burger_with_cheese() {
        let (result, transcript) = run_script("2\nyes\nno\n1\n1\n");
        let receipt = result.unwrap();

        assert_eq!(receipt.item, "Burger + Extra Cheese");
        assert_eq!(receipt.unit_price_cents, 1100);
        assert_eq!(receipt.total_cents, 1100);
        assert_eq!(receipt.payment_method, "Credit Card");
        assert!(transcript.contains("Paid $11.00 using Credit Card."));
    }

    #[test]
    fn test_add_on_answers_are_case_insensitive() {
        let (result, _) = run_script("1\nYES\nYes\n1\n1\n");
        let receipt = result.unwrap();
        assert_eq!(receipt.item, "Pizza + Extra Cheese + Sauce");
        assert_eq!(receipt.unit_price_cents, 575);
    }

    #[test]
    fn test_unrecognized_add_on_answer_means_no() {
        let (result, _) = run_script("3\nmaybe\n\n3\n1\n");
        let receipt = result.unwrap();
        assert_eq!(receipt.item, "Salad");
        assert_eq!(receipt.total_cents, 1500);
    }

    #[test]
    fn test_invalid_menu_selection_terminates_session() {
        let (result, transcript) = run_script("5\n");

        assert!(matches!(
            result,
            Err(SessionError::Order(OrderError::InvalidMenuSelection { .. }))
        ));
        assert!(transcript.contains("Invalid option. Exiting."));
        // No add-on prompt, no receipt, no workflow output
        assert!(!transcript.contains("Add Extra Cheese?"));
        assert!(!transcript.contains("RECEIPT"));
        assert!(!transcript.contains("Order confirmed"));
    }

    #[test]
    fn test_invalid_payment_selection_terminates_after_item() {
        let (result, transcript) = run_script("1\nno\nno\n2\n9\n");

        assert!(matches!(
            result,
            Err(SessionError::Order(
                OrderError::InvalidPaymentSelection { .. }
            ))
        ));
        assert!(transcript.contains("Invalid payment method. Exiting."));
        // Item selection happened, but nothing was paid or confirmed
        assert!(transcript.contains("\t1 - Pizza"));
        assert!(!transcript.contains("Paid "));
        assert!(!transcript.contains("Order confirmed"));
        assert!(!transcript.contains("RECEIPT"));
    }

    #[test]
    fn test_invalid_quantity_terminates_session() {
        for bad in ["abc", "0", "-3", "2.5"] {
            let script = format!("1\nno\nno\n{bad}\n");
            let (result, transcript) = run_script(&script);

            assert!(
                matches!(result, Err(SessionError::Order(OrderError::Validation(_)))),
                "quantity {bad:?} must be rejected"
            );
            assert!(transcript.contains("Invalid quantity. Exiting."));
            assert!(!transcript.contains("Choose Payment Method"));
        }
    }

    #[test]
    fn test_closed_input_is_an_io_error() {
        let (result, _) = run_script("1\nno\n");
        assert!(matches!(result, Err(SessionError::Io(_))));
    }
}
