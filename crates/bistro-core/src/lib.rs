//! # bistro-core: Pure Business Logic for Bistro
//!
//! This crate is the **heart** of Bistro, a console food-ordering
//! simulator. It contains all business logic as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Bistro Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 Terminal App (apps/terminal)                  │  │
//! │  │   prompts ──► parses input ──► prints receipt + workflow      │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │              ★ bistro-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │  ┌────────┐ ┌────────┐ ┌─────────┐ ┌────────┐ ┌──────────┐   │  │
//! │  │  │ money  │ │  menu  │ │ payment │ │ order  │ │ receipt  │   │  │
//! │  │  │ Money  │ │ Meal   │ │ Method  │ │ Order  │ │ Receipt  │   │  │
//! │  │  │ cents  │ │ AddOn  │ │ Record  │ │ stages │ │ snapshot │   │  │
//! │  │  └────────┘ └────────┘ └─────────┘ └────────┘ └──────────┘   │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO CONSOLE • NO NETWORK • PURE FUNCTIONS            │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cents arithmetic (no floats!)
//! - [`menu`] - Menu items, add-ons, and compositional meal pricing
//! - [`payment`] - Payment methods and payment records
//! - [`order`] - The immutable Order and its fixed four-stage workflow
//! - [`receipt`] - Receipt snapshots for printing and journaling
//! - [`validation`] - Input validation at the prompt boundary
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic aside from
//!    receipt numbers and timestamps
//! 2. **No I/O**: Console, file system, and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::menu::{AddOn, Meal, MenuItem};
//! use bistro_core::order::Order;
//! use bistro_core::payment::PaymentMethod;
//!
//! let meal = Meal::new(MenuItem::Pizza).with_add_on(AddOn::ExtraCheese);
//! let order = Order::new(meal, PaymentMethod::CreditCard, 2).unwrap();
//!
//! // (425 + 100) × 2 = 1050 cents
//! assert_eq!(order.total().cents(), 1050);
//!
//! let outcome = order.process();
//! assert_eq!(outcome.payment.amount.cents(), 1050);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod payment;
pub mod receipt;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bistro_core::Money` instead of
// `use bistro_core::money::Money`

pub use error::{OrderError, OrderResult, ValidationError};
pub use menu::{AddOn, Meal, MenuItem};
pub use money::Money;
pub use order::{Order, OrderOutcome, WorkflowStage, WORKFLOW};
pub use payment::{PaymentMethod, PaymentRecord};
pub use receipt::Receipt;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single item in an order.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ORDER_QUANTITY: i64 = 999;
