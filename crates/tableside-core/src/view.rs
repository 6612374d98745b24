//! # Cart View Model
//!
//! Declarative view records the rendering layer maps to UI elements. The
//! original widget rebuilt DOM strings inline; here rendering is a pure
//! function from cart state to data, so the cart logic never touches a
//! presentation framework.
//!
//! ## Render Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Render Pipeline                                   │
//! │                                                                         │
//! │  Cart + CartVisibility ──► render() ──► CartView ──► host page         │
//! │                                                                         │
//! │  CartView                                                               │
//! │  ├── lines[]        one row per cart line, in insertion order          │
//! │  │   ├── formatted unit price / line total (2 decimal places)          │
//! │  │   ├── CustomizationNote (only when customized)                      │
//! │  │   └── RemoveControl (wired back to remove_item)                     │
//! │  ├── total          bare amount for the cart-total element             │
//! │  ├── toggle         label for the toggle control (action + summary)    │
//! │  └── visible        presentational show/hide marker                    │
//! │                                                                         │
//! │  render() is IDEMPOTENT: unchanged state ⇒ identical CartView.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, LineItem};
use crate::money::Money;
use crate::types::ItemId;
use crate::CUSTOMIZATION_SURCHARGE;

// =============================================================================
// Visibility State
// =============================================================================

/// Show/hide state of the cart display.
///
/// Two states, flipped only by explicit guest action on the toggle control.
/// Purely presentational; cart data is untouched by toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CartVisibility {
    /// Initial state: the cart list is collapsed.
    #[default]
    Hidden,

    /// The cart list is expanded.
    Shown,
}

impl CartVisibility {
    /// Flips the state.
    pub fn toggle(&mut self) {
        *self = match self {
            CartVisibility::Hidden => CartVisibility::Shown,
            CartVisibility::Shown => CartVisibility::Hidden,
        };
    }

    /// Whether the cart list is currently expanded.
    pub fn is_shown(&self) -> bool {
        matches!(self, CartVisibility::Shown)
    }
}

// =============================================================================
// View Records
// =============================================================================

/// Customization annotation on a cart row; present only when the line
/// carries a non-empty customization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CustomizationNote {
    /// The guest's free-text customization.
    pub text: String,

    /// The fixed surcharge annotation ("+5.00 PLN").
    pub surcharge_label: String,
}

/// The remove control of a cart row. Invoking it means
/// `remove_item(item_id, customization)` - the customization text rides
/// along so the control targets exactly this line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RemoveControl {
    /// Menu item id of the targeted line.
    pub item_id: ItemId,

    /// Customization text of the targeted line (empty when none).
    pub customization: String,
}

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineView {
    /// Menu item id.
    pub item_id: ItemId,

    /// Dish name.
    pub name: String,

    /// Units merged into this row.
    pub quantity: i64,

    /// Unit price, two decimal places with currency ("30.00 PLN").
    pub unit_price: String,

    /// Line total, two decimal places with currency ("60.00 PLN").
    pub line_total: String,

    /// Present only for customized lines.
    pub customization: Option<CustomizationNote>,

    /// Control that removes exactly this line.
    pub remove: RemoveControl,
}

impl From<&LineItem> for LineView {
    fn from(line: &LineItem) -> Self {
        let customization = line.is_customized().then(|| CustomizationNote {
            text: line.customization.clone(),
            surcharge_label: format!("+{}", CUSTOMIZATION_SURCHARGE),
        });

        LineView {
            item_id: line.item_id,
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price.to_string(),
            line_total: line.line_total.to_string(),
            customization,
            remove: RemoveControl {
                item_id: line.item_id,
                customization: line.customization.clone(),
            },
        }
    }
}

/// Label for the cart-toggle control, which doubles as the cart summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ToggleLabel {
    /// "Show cart" or "Hide cart", by visibility state.
    pub action: String,

    /// Running total plus the cart glyph ("35.00 PLN 🛒").
    pub summary: String,
}

impl ToggleLabel {
    fn new(visibility: CartVisibility, total: Money) -> Self {
        let action = if visibility.is_shown() {
            "Hide cart"
        } else {
            "Show cart"
        };

        ToggleLabel {
            action: action.to_string(),
            summary: format!("{} 🛒", total),
        }
    }
}

/// The complete cart view, rebuilt in full on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    /// One row per cart line, insertion order.
    pub lines: Vec<LineView>,

    /// Bare running total for the cart-total element ("35.00").
    pub total: String,

    /// Toggle control label.
    pub toggle: ToggleLabel,

    /// Presentational show/hide marker for the cart container.
    pub visible: bool,
}

/// Builds the view-model for the current cart state.
///
/// Pure and idempotent: rendering twice with unchanged state yields an
/// identical [`CartView`].
pub fn render(cart: &Cart, visibility: CartVisibility) -> CartView {
    CartView {
        lines: cart.items().iter().map(LineView::from).collect(),
        total: cart.running_total().amount_string(),
        toggle: ToggleLabel::new(visibility, cart.running_total()),
        visible: visibility.is_shown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(ItemId(1), "Pizza", Money::from_minor(3000), "");
        cart.add_item(ItemId(2), "Burger", Money::from_minor(2000), "extra cheese");
        cart
    }

    #[test]
    fn test_render_rows() {
        let view = render(&sample_cart(), CartVisibility::Hidden);

        assert_eq!(view.lines.len(), 2);
        let pizza = &view.lines[0];
        assert_eq!(pizza.name, "Pizza");
        assert_eq!(pizza.quantity, 1);
        assert_eq!(pizza.unit_price, "30.00 PLN");
        assert_eq!(pizza.line_total, "30.00 PLN");
        assert!(pizza.customization.is_none());
        assert_eq!(pizza.remove.item_id, ItemId(1));
        assert_eq!(pizza.remove.customization, "");
    }

    #[test]
    fn test_render_customization_note() {
        let view = render(&sample_cart(), CartVisibility::Hidden);

        let burger = &view.lines[1];
        let note = burger.customization.as_ref().unwrap();
        assert_eq!(note.text, "extra cheese");
        assert_eq!(note.surcharge_label, "+5.00 PLN");
        // The remove control targets the customized line specifically
        assert_eq!(burger.remove.customization, "extra cheese");
    }

    #[test]
    fn test_render_totals_and_toggle() {
        let view = render(&sample_cart(), CartVisibility::Hidden);

        // 30.00 + 20.00 + 5.00 surcharge
        assert_eq!(view.total, "55.00");
        assert_eq!(view.toggle.action, "Show cart");
        assert_eq!(view.toggle.summary, "55.00 PLN 🛒");
        assert!(!view.visible);
    }

    #[test]
    fn test_render_shown_state() {
        let view = render(&sample_cart(), CartVisibility::Shown);

        assert_eq!(view.toggle.action, "Hide cart");
        assert!(view.visible);
    }

    #[test]
    fn test_render_is_idempotent() {
        let cart = sample_cart();
        let first = render(&cart, CartVisibility::Shown);
        let second = render(&cart, CartVisibility::Shown);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_empty_cart() {
        let view = render(&Cart::new(), CartVisibility::Hidden);
        assert!(view.lines.is_empty());
        assert_eq!(view.total, "0.00");
        assert_eq!(view.toggle.summary, "0.00 PLN 🛒");
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = render(&sample_cart(), CartVisibility::Shown);
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["total"], "55.00");
        assert_eq!(value["visible"], true);
        assert_eq!(value["toggle"]["summary"], "55.00 PLN 🛒");
        assert_eq!(
            value["lines"][1]["customization"]["surchargeLabel"],
            "+5.00 PLN"
        );
        assert_eq!(value["lines"][1]["remove"]["itemId"], 2);
    }

    #[test]
    fn test_visibility_toggle() {
        let mut visibility = CartVisibility::default();
        assert!(!visibility.is_shown());

        visibility.toggle();
        assert!(visibility.is_shown());

        visibility.toggle();
        assert!(!visibility.is_shown());
    }
}
