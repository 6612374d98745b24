//! # Host Page Ports
//!
//! The widget never touches a UI toolkit. Everything it needs from the
//! surrounding page arrives through the [`HostPage`] trait, injected into
//! the controller at construction.
//!
//! ## The Injected Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    HostPage Responsibilities                            │
//! │                                                                         │
//! │  customization_for ──► per-item customization text input               │
//! │  render ─────────────► cart list + toggle label + total element        │
//! │  pulse_attention ────► transient marker on the toggle control          │
//! │  notify ─────────────► blocking notice dialog                          │
//! │  confirm ────────────► blocking yes/no dialog                          │
//! │  location_path ──────► current page path (carries the table number)    │
//! │  navigate ───────────► leave for the order-status view                 │
//! │                                                                         │
//! │  One implementation per host: a browser page, a kiosk shell, or an     │
//! │  in-memory fake in tests.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tableside_core::types::ItemId;
use tableside_core::view::CartView;

/// The page surface the cart widget consumes.
///
/// ## Design Notes
/// Dialog methods are blocking and synchronous from the controller's
/// perspective: the host yields to its platform dialog and returns the
/// guest's answer. Mutating methods take `&mut self` so in-memory test
/// implementations can record calls without interior mutability.
pub trait HostPage {
    /// Current text of the customization input for a menu item.
    ///
    /// Returns `None` when the item has no customization input on the page
    /// (non-customizable items); the controller treats that as an empty
    /// customization.
    fn customization_for(&self, item_id: ItemId) -> Option<String>;

    /// Replaces the visible cart representation with the given view.
    ///
    /// Called after every cart mutation and visibility change. The view is
    /// complete; the host does not diff against previous state.
    fn render(&mut self, view: &CartView);

    /// Applies a transient attention marker to the cart-toggle control for
    /// the given window, then removes it.
    fn pulse_attention(&mut self, window: Duration);

    /// Surfaces a blocking notice to the guest.
    fn notify(&mut self, notice: &str);

    /// Asks the guest a blocking yes/no question.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// The current page path, whose final segment is the table number.
    fn location_path(&self) -> String;

    /// Navigates the page away from the menu view.
    fn navigate(&mut self, path: &str);
}
