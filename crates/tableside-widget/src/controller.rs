//! # Cart Controller
//!
//! One controller instance per page view: owns the cart and its visibility
//! state, reacts to guest actions, and drives the host page. No ambient
//! globals - hosts can run several widgets side by side.
//!
//! ## Controller Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Controller Lifecycle                                 │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Confirm  │────►│  Placed  │       │
//! │  │  Cart    │     │          │     │  Dialog  │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                │             │
//! │                   add_item          submit_order     navigate to       │
//! │                   remove_item                        /order_status     │
//! │                   toggle_visibility                                     │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   render() after every mutation                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tracing::{debug, error, info};

use tableside_core::cart::Cart;
use tableside_core::types::{ItemId, MenuItem, OrderId, TableId};
use tableside_core::view::{self, CartVisibility};

use crate::api::{OrderGateway, OrderRequest};
use crate::error::WidgetError;
use crate::ports::HostPage;

/// How long the attention marker stays on the cart-toggle control after an
/// add.
pub const ATTENTION_PULSE: Duration = Duration::from_millis(500);

/// Blocking notice for a submit attempt with an empty cart.
const EMPTY_CART_NOTICE: &str = "Your cart is empty! Add dishes before placing an order.";

/// Blocking confirmation asked before the order is sent.
const CONFIRM_ORDER_PROMPT: &str =
    "Place this order? The selected dishes will be sent to the kitchen.";

/// Blocking notice when the order endpoint fails; the cart is kept intact
/// so the guest can retry.
const SUBMIT_FAILED_NOTICE: &str =
    "Placing the order failed. Your cart is unchanged - please try again.";

/// What became of a `submit_order` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The order was accepted; the page was sent to the status view.
    Placed(OrderId),

    /// Nothing to submit; the guest was notified, no request was made.
    EmptyCart,

    /// The guest answered no to the confirmation; cart unchanged.
    Declined,
}

/// The cart widget controller.
///
/// Generic over its two seams: the order gateway (HTTP in production,
/// in-memory in tests) and the host page surface.
#[derive(Debug)]
pub struct CartController<G, P> {
    cart: Cart,
    visibility: CartVisibility,
    gateway: G,
    page: P,
}

impl<G: OrderGateway, P: HostPage> CartController<G, P> {
    /// Creates a controller with an empty, hidden cart.
    pub fn new(gateway: G, page: P) -> Self {
        CartController {
            cart: Cart::new(),
            visibility: CartVisibility::default(),
            gateway,
            page,
        }
    }

    /// Adds one unit of a menu item to the cart.
    ///
    /// ## Behavior
    /// - The customization text comes from the page's per-item input;
    ///   items without an input (non-customizable dishes) add with an empty
    ///   customization.
    /// - Re-renders the cart and pulses the attention marker on the toggle
    ///   control for [`ATTENTION_PULSE`].
    pub fn add_item(&mut self, item: &MenuItem) {
        let customization = self.page.customization_for(item.id).unwrap_or_default();
        debug!(item_id = %item.id, customized = !customization.is_empty(), "add_item");

        self.cart
            .add_item(item.id, &item.name, item.unit_price, &customization);

        self.render();
        self.page.pulse_attention(ATTENTION_PULSE);
    }

    /// Removes the line matching `(item_id, customization)` exactly.
    ///
    /// A miss is logged and otherwise ignored; the cart re-renders either
    /// way.
    pub fn remove_item(&mut self, item_id: ItemId, customization: &str) {
        if !self.cart.remove_item(item_id, customization) {
            debug!(%item_id, "remove_item: no matching line");
        } else {
            debug!(%item_id, "remove_item");
        }

        self.render();
    }

    /// Rebuilds the view-model and hands it to the host page.
    ///
    /// Idempotent: repeated calls with unchanged state produce identical
    /// views.
    pub fn render(&mut self) {
        let view = view::render(&self.cart, self.visibility);
        self.page.render(&view);
    }

    /// Flips the cart display between hidden and shown.
    ///
    /// Purely presentational - cart data is untouched; the re-render picks
    /// up the new toggle label and visibility marker.
    pub fn toggle_visibility(&mut self) {
        self.visibility.toggle();
        debug!(shown = self.visibility.is_shown(), "toggle_visibility");
        self.render();
    }

    /// Submits the accumulated cart as an order.
    ///
    /// ## Flow
    /// 1. Empty cart: blocking notice, no request, `Ok(EmptyCart)`.
    /// 2. The table number is parsed from the final segment of the page
    ///    path; a bad path is a typed error (no confirmation is asked).
    /// 3. The guest confirms; a decline is `Ok(Declined)` with the cart
    ///    unchanged.
    /// 4. One request to the order endpoint. Success navigates to the
    ///    status view and resets the cart for the next page view. Failure
    ///    surfaces a retry notice, leaves the cart intact, and propagates
    ///    the typed error.
    ///
    /// There is no retry and no submission de-duplication; hosts that allow
    /// double-tapping the submit control must gate it themselves.
    pub async fn submit_order(&mut self) -> Result<SubmitOutcome, WidgetError> {
        if self.cart.is_empty() {
            debug!("submit_order: cart is empty");
            self.page.notify(EMPTY_CART_NOTICE);
            return Ok(SubmitOutcome::EmptyCart);
        }

        let path = self.page.location_path();
        let table_id = TableId::from_path(&path)?;

        if !self.page.confirm(CONFIRM_ORDER_PROMPT) {
            debug!(%table_id, "submit_order: declined by guest");
            return Ok(SubmitOutcome::Declined);
        }

        let request = OrderRequest::from_cart(table_id, &self.cart);
        match self.gateway.place_order(&request).await {
            Ok(receipt) => {
                info!(order_id = %receipt.order_id, %table_id, "order placed");
                self.page
                    .navigate(&format!("/order_status/{}", receipt.order_id));

                // The status view replaces the menu page; the cart starts
                // from nothing if the host keeps this controller alive.
                self.cart.clear();
                self.render();
                Ok(SubmitOutcome::Placed(receipt.order_id))
            }
            Err(err) => {
                error!(%err, %table_id, "order submission failed");
                self.page.notify(SUBMIT_FAILED_NOTICE);
                Err(err.into())
            }
        }
    }

    /// Read access to the cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current show/hide state of the cart display.
    pub fn visibility(&self) -> CartVisibility {
        self.visibility
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
