//! # Menu Module
//!
//! The priceable catalog: base menu items, add-on modifiers, and the
//! `Meal` composition that combines them.
//!
//! ## Compositional Pricing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    How a Meal is Priced                             │
//! │                                                                     │
//! │  MenuItem::Pizza ($4.25)                                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Meal { base: Pizza, add_ons: [] }                                  │
//! │       │  with_add_on(ExtraCheese)     +$1.00                        │
//! │       ▼                                                             │
//! │  Meal { base: Pizza, add_ons: [ExtraCheese] }                       │
//! │       │  with_add_on(Sauce)           +$0.50                        │
//! │       ▼                                                             │
//! │  Meal { base: Pizza, add_ons: [ExtraCheese, Sauce] }                │
//! │                                                                     │
//! │  description() = "Pizza + Extra Cheese + Sauce"                     │
//! │  unit_price()  = 425 + 100 + 50 = 575 cents                         │
//! │  total_price(2) = 1150 cents                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Notes
//! The modifier chain is flattened into a `Vec<AddOn>` instead of nested
//! wrapper structs. Price queries walk the list once, so a deep stack of
//! add-ons never recurses. No modifier stores an absolute price: the unit
//! price is recomputed from the base item plus surcharges on every call,
//! which keeps stacking order irrelevant to the total.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{OrderError, OrderResult};
use crate::money::Money;

// =============================================================================
// Menu Item
// =============================================================================

/// A base item on the menu.
///
/// The catalog is a closed set: the menu is fixed, so a small enum beats
/// an open-ended trait hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuItem {
    Pizza,
    Burger,
    Salad,
}

impl MenuItem {
    /// All items, in menu-code order. Used to render the selection menu.
    pub const ALL: [MenuItem; 3] = [MenuItem::Pizza, MenuItem::Burger, MenuItem::Salad];

    /// Display name shown on the menu and the receipt.
    pub const fn name(&self) -> &'static str {
        match self {
            MenuItem::Pizza => "Pizza",
            MenuItem::Burger => "Burger",
            MenuItem::Salad => "Salad",
        }
    }

    /// Catalog unit price.
    pub const fn price(&self) -> Money {
        match self {
            MenuItem::Pizza => Money::from_cents(425),
            MenuItem::Burger => Money::from_cents(1000),
            MenuItem::Salad => Money::from_cents(500),
        }
    }

    /// The one-based code the menu prompt accepts for this item.
    pub const fn menu_code(&self) -> u32 {
        match self {
            MenuItem::Pizza => 1,
            MenuItem::Burger => 2,
            MenuItem::Salad => 3,
        }
    }

    /// Resolves raw menu-prompt input to an item.
    ///
    /// Accepted inputs are the codes {1, 2, 3}. Anything else, including
    /// non-numeric input, is an invalid selection and fatal to the
    /// session.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::menu::MenuItem;
    ///
    /// assert_eq!(MenuItem::from_menu_input("2").unwrap(), MenuItem::Burger);
    /// assert!(MenuItem::from_menu_input("5").is_err());
    /// assert!(MenuItem::from_menu_input("pizza").is_err());
    /// ```
    pub fn from_menu_input(input: &str) -> OrderResult<Self> {
        match input.trim() {
            "1" => Ok(MenuItem::Pizza),
            "2" => Ok(MenuItem::Burger),
            "3" => Ok(MenuItem::Salad),
            other => Err(OrderError::InvalidMenuSelection {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Add-On
// =============================================================================

/// An optional modifier applied on top of a base item.
///
/// An add-on carries only its own surcharge and description suffix,
/// never an absolute price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOn {
    ExtraCheese,
    Sauce,
}

impl AddOn {
    /// All add-ons, in the order they are offered during customization.
    pub const ALL: [AddOn; 2] = [AddOn::ExtraCheese, AddOn::Sauce];

    /// Description suffix, appended to the meal as `" + <suffix>"`.
    pub const fn suffix(&self) -> &'static str {
        match self {
            AddOn::ExtraCheese => "Extra Cheese",
            AddOn::Sauce => "Sauce",
        }
    }

    /// Surcharge added to the wrapped item's unit price.
    pub const fn surcharge(&self) -> Money {
        match self {
            AddOn::ExtraCheese => Money::from_cents(100),
            AddOn::Sauce => Money::from_cents(50),
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

// =============================================================================
// Meal
// =============================================================================

/// A base menu item plus zero or more add-ons.
///
/// ## Invariants
/// - `unit_price()` is recomputed on every call: base price plus the sum
///   of surcharges, never cached
/// - `description()` reflects add-ons in application order
/// - Read-only queries never mutate the meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    base: MenuItem,
    add_ons: Vec<AddOn>,
}

impl Meal {
    /// Creates a plain meal with no add-ons.
    pub fn new(base: MenuItem) -> Self {
        Meal {
            base,
            add_ons: Vec::new(),
        }
    }

    /// Applies an add-on, consuming and returning the meal.
    ///
    /// Add-ons stack: the same add-on may be applied more than once and
    /// each application adds its surcharge and suffix again.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::menu::{AddOn, Meal, MenuItem};
    ///
    /// let meal = Meal::new(MenuItem::Burger).with_add_on(AddOn::ExtraCheese);
    /// assert_eq!(meal.description(), "Burger + Extra Cheese");
    /// assert_eq!(meal.unit_price().cents(), 1100);
    /// ```
    #[must_use]
    pub fn with_add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.push(add_on);
        self
    }

    /// The base item this meal was built from.
    pub fn base(&self) -> MenuItem {
        self.base
    }

    /// The add-ons applied so far, in application order.
    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Human-readable name: base name plus `" + <suffix>"` per add-on.
    pub fn description(&self) -> String {
        let mut description = self.base.name().to_string();
        for add_on in &self.add_ons {
            description.push_str(" + ");
            description.push_str(add_on.suffix());
        }
        description
    }

    /// Per-unit price: base price plus every add-on surcharge.
    pub fn unit_price(&self) -> Money {
        self.add_ons
            .iter()
            .fold(self.base.price(), |price, add_on| {
                price + add_on.surcharge()
            })
    }

    /// Quantity-scaled total, recomputed from `unit_price()`.
    pub fn total_price(&self, quantity: i64) -> Money {
        self.unit_price().multiply_quantity(quantity)
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
