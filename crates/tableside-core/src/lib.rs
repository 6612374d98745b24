//! # tableside-core: Pure Business Logic for the Tableside Cart Widget
//!
//! This crate is the **heart** of the Tableside table-ordering widget. It
//! contains all cart logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tableside Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Host Page (rendering layer)                    │   │
//! │  │    Menu buttons ──► Cart list ──► Toggle control ──► Dialogs   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HostPage trait                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  tableside-widget (runtime)                     │   │
//! │  │    CartController, OrderGateway, config, telemetry             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ tableside-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │   view    │  │   │
//! │  │   │  MenuItem │  │   Money   │  │   Cart    │  │  CartView │  │   │
//! │  │   │  TableId  │  │  PLN fmt  │  │ LineItem  │  │  render   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO UI • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, ItemId, TableId, OrderId)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart state: line items and the running total
//! - [`view`] - Declarative view-model the rendering layer maps to UI
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, UI, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in grosze (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tableside_core::cart::Cart;
//! use tableside_core::money::Money;
//! use tableside_core::types::ItemId;
//!
//! let mut cart = Cart::new();
//! cart.add_item(ItemId(2), "Burger", Money::from_minor(2000), "extra cheese");
//!
//! // Customized add-events carry a flat 5.00 PLN surcharge in the
//! // running total; the stored line total stays at the unit price.
//! assert_eq!(cart.running_total(), Money::from_minor(2500));
//! assert_eq!(cart.items()[0].line_total, Money::from_minor(2000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tableside_core::Money` instead of
// `use tableside_core::money::Money`

pub use cart::{Cart, LineItem};
pub use error::CoreError;
pub use money::Money;
pub use types::{ItemId, MenuItem, OrderId, TableId};
pub use view::{CartView, CartVisibility, LineView};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Display suffix for every formatted amount ("30.00 PLN").
///
/// ## Why a constant?
/// The backend prices, stores, and reports in a single currency. Multi-currency
/// support is an explicit non-goal, so the suffix is fixed rather than
/// configurable.
pub const CURRENCY_SUFFIX: &str = "PLN";

/// Flat surcharge applied once per add-event that carries a customization.
///
/// ## Business Rule
/// A customized dish costs its unit price plus 5.00 PLN *per add*, and the
/// surcharge lives only in the running total - never in the stored line
/// total. The backend derives its own surcharge from the customization field
/// of each submitted item, so folding it into the line total would charge the
/// guest twice.
pub const CUSTOMIZATION_SURCHARGE: Money = Money::from_minor(500);
