//! # Cart State
//!
//! The in-memory cart: an insertion-ordered list of line items plus a
//! running total that is maintained incrementally, never recomputed.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart State Operations                             │
//! │                                                                         │
//! │  Guest Action             Controller Call         Cart State Change    │
//! │  ────────────             ───────────────         ─────────────────    │
//! │                                                                         │
//! │  Tap dish ───────────────► add_item() ──────────► merge or push line   │
//! │                                                    total += price (+5) │
//! │                                                                         │
//! │  Tap remove ─────────────► remove_item() ───────► drop first match     │
//! │                                                    total -= line total │
//! │                                                                         │
//! │  Order placed ───────────► clear() ─────────────► items.clear()        │
//! │                                                    total = 0           │
//! │                                                                         │
//! │  Line identity is (item id, customization text): the same dish with    │
//! │  a different customization is a separate line.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Surcharge Asymmetry
//! A customized add-event contributes `unit price + 5.00 PLN` to the running
//! total but only `unit price` to the stored line total. The backend derives
//! its own surcharge from each submitted item's customization field, so the
//! line totals on the wire must stay surcharge-free. See
//! [`crate::CUSTOMIZATION_SURCHARGE`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::ItemId;
use crate::CUSTOMIZATION_SURCHARGE;

/// One distinct (item id, customization) grouping in the cart.
///
/// ## Design Notes
/// - `name` and `unit_price` are frozen copies of menu data at add time;
///   the cart displays consistent rows even if the menu changes mid-visit.
/// - `line_total` is the sum of per-add charges for this line, NOT
///   `unit_price × quantity` in general: the customization surcharge is
///   accounted in the cart-wide running total only.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Menu item id (not unique across the cart).
    pub item_id: ItemId,

    /// Dish name at time of adding (frozen).
    pub name: String,

    /// Price of one unit at time of adding (frozen).
    pub unit_price: Money,

    /// Units merged into this line. Starts at 1, +1 per repeat add.
    pub quantity: i64,

    /// Accumulated price contribution of this line (surcharge-free).
    pub line_total: Money,

    /// Free-text customization; empty string when absent.
    pub customization: String,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    fn new(item_id: ItemId, name: &str, unit_price: Money, customization: &str) -> Self {
        LineItem {
            item_id,
            name: name.to_string(),
            unit_price,
            quantity: 1,
            line_total: unit_price,
            customization: customization.to_string(),
            added_at: Utc::now(),
        }
    }

    /// Line identity check: both the id and the exact customization text
    /// must match (empty matches empty only).
    fn matches(&self, item_id: ItemId, customization: &str) -> bool {
        self.item_id == item_id && self.customization == customization
    }

    /// Whether this line carries a customization.
    pub fn is_customized(&self) -> bool {
        !self.customization.is_empty()
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by (item id, customization); a repeat add merges.
/// - Insertion order is preserved; updates never reorder.
/// - The running total moves only inside `add_item`/`remove_item`/`clear`;
///   fields are private so the bookkeeping cannot be bypassed.
///
/// ## Lifecycle
/// Created empty when the page loads, lives in memory for the page view,
/// and is rebuilt from nothing once order submission navigates away. There
/// is no persistence (deliberate non-goal).
#[derive(Debug, Clone)]
pub struct Cart {
    /// Lines in insertion order.
    items: Vec<LineItem>,

    /// Incrementally maintained cart-wide total, surcharges included.
    running_total: Money,

    /// When the cart was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            running_total: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of a dish to the cart.
    ///
    /// ## Behavior
    /// - A line matching both `item_id` and the exact `customization` text
    ///   gains `quantity += 1` and `line_total += unit_price`.
    /// - Otherwise a fresh line is appended with quantity 1 and
    ///   `line_total = unit_price`.
    /// - The running total grows by `unit_price + 5.00 PLN` when the
    ///   customization is non-empty, by `unit_price` otherwise - per
    ///   add-event, independent of merging.
    ///
    /// Never fails: a missing customization input upstream is already an
    /// empty string by the time it reaches the cart.
    pub fn add_item(&mut self, item_id: ItemId, name: &str, unit_price: Money, customization: &str) {
        match self
            .items
            .iter_mut()
            .find(|line| line.matches(item_id, customization))
        {
            Some(line) => {
                line.quantity += 1;
                line.line_total += unit_price;
            }
            None => {
                self.items
                    .push(LineItem::new(item_id, name, unit_price, customization));
            }
        }

        self.running_total += unit_price;
        if !customization.is_empty() {
            self.running_total += CUSTOMIZATION_SURCHARGE;
        }
    }

    /// Removes the first line matching `(item_id, customization)` exactly.
    ///
    /// Subtracts that line's entire `line_total` from the running total.
    /// A miss is a no-op, not an error.
    ///
    /// ## Returns
    /// `true` if a line was removed.
    pub fn remove_item(&mut self, item_id: ItemId, customization: &str) -> bool {
        let Some(index) = self
            .items
            .iter()
            .position(|line| line.matches(item_id, customization))
        else {
            return false;
        };

        let line = self.items.remove(index);
        self.running_total -= line.line_total;
        true
    }

    /// Clears all lines and resets the running total.
    ///
    /// ## When Used
    /// The host rebuilds the widget after order submission navigates to the
    /// status view; `clear` is the in-place equivalent for hosts that keep
    /// the controller alive.
    pub fn clear(&mut self) {
        self.items.clear();
        self.running_total = Money::zero();
        self.created_at = Utc::now();
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The cart-wide running total, surcharges included.
    pub fn running_total(&self) -> Money {
        self.running_total
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza_price() -> Money {
        Money::from_minor(3000)
    }

    #[test]
    fn test_repeat_add_merges_line() {
        let mut cart = Cart::new();
        cart.add_item(ItemId(1), "Pizza", pizza_price(), "");
        cart.add_item(ItemId(1), "Pizza", pizza_price(), "");

        assert_eq!(cart.item_count(), 1);
        let line = &cart.items()[0];
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total, Money::from_minor(6000));
        assert_eq!(cart.running_total(), Money::from_minor(6000));
    }

    #[test]
    fn test_customized_add_surcharges_running_total_only() {
        let mut cart = Cart::new();
        cart.add_item(ItemId(2), "Burger", Money::from_minor(2000), "extra cheese");

        assert_eq!(cart.item_count(), 1);
        let line = &cart.items()[0];
        assert_eq!(line.quantity, 1);
        // The stored line total excludes the surcharge...
        assert_eq!(line.line_total, Money::from_minor(2000));
        // ...which lives only in the running total.
        assert_eq!(cart.running_total(), Money::from_minor(2500));
    }

    #[test]
    fn test_customization_separates_lines() {
        let mut cart = Cart::new();
        cart.add_item(ItemId(1), "Pizza", pizza_price(), "");
        cart.add_item(ItemId(1), "Pizza", pizza_price(), "no olives");

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.items()[1].customization, "no olives");
        // 30 + 30 + 5 surcharge
        assert_eq!(cart.running_total(), Money::from_minor(6500));
    }

    #[test]
    fn test_surcharge_applies_per_add_event() {
        let mut cart = Cart::new();
        cart.add_item(ItemId(2), "Burger", Money::from_minor(2000), "extra cheese");
        cart.add_item(ItemId(2), "Burger", Money::from_minor(2000), "extra cheese");

        // One merged line: 2 × unit price, surcharge never folded in
        let line = &cart.items()[0];
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total, Money::from_minor(4000));
        // Running total carries the surcharge once per add-event
        assert_eq!(cart.running_total(), Money::from_minor(5000));
    }

    #[test]
    fn test_remove_returns_total_to_zero() {
        let mut cart = Cart::new();
        cart.add_item(ItemId(3), "Soup", Money::from_minor(1000), "");

        assert!(cart.remove_item(ItemId(3), ""));
        assert!(cart.is_empty());
        assert!(cart.running_total().is_zero());
    }

    #[test]
    fn test_remove_miss_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(ItemId(1), "Pizza", pizza_price(), "");

        assert!(!cart.remove_item(ItemId(9), ""));
        assert!(!cart.remove_item(ItemId(1), "no olives"));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.running_total(), pizza_price());
    }

    #[test]
    fn test_remove_then_readd_starts_fresh() {
        let mut cart = Cart::new();
        cart.add_item(ItemId(1), "Pizza", pizza_price(), "");
        cart.add_item(ItemId(1), "Pizza", pizza_price(), "");
        cart.remove_item(ItemId(1), "");

        cart.add_item(ItemId(1), "Pizza", pizza_price(), "");
        let line = &cart.items()[0];
        assert_eq!(line.quantity, 1);
        assert_eq!(line.line_total, pizza_price());
        assert_eq!(cart.running_total(), pizza_price());
    }

    /// Documents the preserved compatibility quirk: removing a customized
    /// line subtracts only its surcharge-free line total, so the add-event
    /// surcharges stay behind in the running total.
    #[test]
    fn test_surcharge_residue_after_removing_customized_line() {
        let mut cart = Cart::new();
        cart.add_item(ItemId(2), "Burger", Money::from_minor(2000), "extra cheese");
        cart.remove_item(ItemId(2), "extra cheese");

        assert!(cart.is_empty());
        assert_eq!(cart.running_total(), Money::from_minor(500));
    }

    #[test]
    fn test_insertion_order_preserved_across_merges() {
        let mut cart = Cart::new();
        cart.add_item(ItemId(1), "Pizza", pizza_price(), "");
        cart.add_item(ItemId(3), "Soup", Money::from_minor(1000), "");
        cart.add_item(ItemId(1), "Pizza", pizza_price(), "");

        let names: Vec<&str> = cart.items().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Pizza", "Soup"]);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(ItemId(1), "Pizza", pizza_price(), "");
        cart.add_item(ItemId(2), "Burger", Money::from_minor(2000), "extra cheese");

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.running_total().is_zero());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_running_total_matches_line_totals_without_customizations() {
        let mut cart = Cart::new();
        cart.add_item(ItemId(1), "Pizza", pizza_price(), "");
        cart.add_item(ItemId(3), "Soup", Money::from_minor(1000), "");
        cart.add_item(ItemId(1), "Pizza", pizza_price(), "");
        cart.remove_item(ItemId(3), "");

        let sum: Money = cart
            .items()
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total);
        assert_eq!(cart.running_total(), sum);
    }
}
