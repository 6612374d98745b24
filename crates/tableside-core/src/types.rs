//! # Domain Types
//!
//! Core domain types used throughout the Tableside widget.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │     ItemId      │   │    TableId      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  i64 newtype    │   │  i64 newtype    │       │
//! │  │  name           │   │  NOT unique in  │   │  parsed from    │       │
//! │  │  unit_price     │   │  the cart; key  │   │  the final path │       │
//! │  │  customizable   │   │  is (id, text)  │   │  segment        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  OrderId: assigned by the backend, keys the /order_status/<id> view    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

/// Menu item identifier.
///
/// Deliberately NOT unique within a cart: two lines may share an `ItemId`
/// when their customization texts differ. Line identity is the pair
/// `(ItemId, customization)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order identifier assigned by the backend when an order is placed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct OrderId(pub i64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Table identifier, derived from the page the guest scanned into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct TableId(pub i64);

impl TableId {
    /// Parses the table number from the final segment of a page path.
    ///
    /// The ordering page lives at `/menu/<table>`, so the table number is
    /// whatever follows the last `/`.
    ///
    /// ## Example
    /// ```rust
    /// use tableside_core::types::TableId;
    ///
    /// assert_eq!(TableId::from_path("/menu/12").unwrap(), TableId(12));
    /// assert!(TableId::from_path("/menu/").is_err());
    /// assert!(TableId::from_path("/menu/window-seat").is_err());
    /// ```
    pub fn from_path(path: &str) -> CoreResult<Self> {
        let segment = path.rsplit('/').next().unwrap_or("");
        segment
            .parse::<i64>()
            .map(TableId)
            .map_err(|_| CoreError::InvalidTablePath {
                path: path.to_string(),
            })
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A dish on the menu page, as the host renders it.
///
/// ## Design Notes
/// The backend owns the full menu record (description, category, photo,
/// display date); the widget only consumes what the add-to-cart control
/// carries. `customizable` decides whether the page shows a per-item
/// customization text input - non-customizable items never have one, so
/// their customization text is always empty.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItem {
    /// Menu item identifier.
    pub id: ItemId,

    /// Display name shown on the menu and in the cart.
    pub name: String,

    /// Price of one unit.
    pub unit_price: Money,

    /// Whether the page offers a customization input for this item.
    pub customizable: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_id_from_path() {
        assert_eq!(TableId::from_path("/menu/12").unwrap(), TableId(12));
        assert_eq!(TableId::from_path("/menu/7").unwrap(), TableId(7));
        // A bare segment with no slashes still parses
        assert_eq!(TableId::from_path("3").unwrap(), TableId(3));
    }

    #[test]
    fn test_table_id_from_path_rejects_garbage() {
        assert!(TableId::from_path("/menu/").is_err());
        assert!(TableId::from_path("/menu/window-seat").is_err());
        assert!(TableId::from_path("").is_err());
    }

    #[test]
    fn test_display_impls() {
        assert_eq!(ItemId(4).to_string(), "4");
        assert_eq!(TableId(12).to_string(), "12");
        assert_eq!(OrderId(88).to_string(), "88");
    }
}
