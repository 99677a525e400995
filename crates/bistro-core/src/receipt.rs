//! # Receipt Module
//!
//! The printed receipt block for a finalized order.
//!
//! A receipt is a snapshot: description, prices, and payment label are
//! frozen at creation time, so the rendered block stays consistent even
//! after the order itself is consumed by the workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::money::Money;
use crate::order::Order;

// =============================================================================
// Receipt
// =============================================================================

/// Snapshot of a finalized order, ready for printing and journaling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Receipt number (UUID v4, unique without coordination).
    pub receipt_number: String,
    /// Full item description including add-ons.
    pub item: String,
    /// Units ordered.
    pub quantity: i64,
    /// Per-unit price in cents at order time.
    pub unit_price_cents: i64,
    /// Total in cents (`unit_price × quantity`).
    pub total_cents: i64,
    /// Label of the chosen payment method.
    pub payment_method: String,
    /// When the receipt was issued.
    pub created_at: DateTime<Utc>,
}

impl Receipt {
    /// Snapshots an order into a receipt.
    pub fn for_order(order: &Order) -> Self {
        Receipt {
            receipt_number: Uuid::new_v4().to_string(),
            item: order.meal().description(),
            quantity: order.quantity(),
            unit_price_cents: order.meal().unit_price().cents(),
            total_cents: order.total().cents(),
            payment_method: order.payment_method().label().to_string(),
            created_at: Utc::now(),
        }
    }

    /// The per-unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// The total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// Display renders the receipt block exactly as the terminal prints it.
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------ RECEIPT ------")?;
        writeln!(f, "Receipt #: {}", self.receipt_number)?;
        writeln!(f, "Date: {}", self.created_at.format("%Y-%m-%d %H:%M UTC"))?;
        writeln!(f, "Item: {}", self.item)?;
        writeln!(f, "Quantity: {}", self.quantity)?;
        writeln!(f, "Unit Price: {}", self.unit_price())?;
        writeln!(f, "Total Price: {}", self.total())?;
        write!(f, "Payment Method: {}", self.payment_method)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
