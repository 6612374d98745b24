//! # Widget Error Types
//!
//! Unified error types for the widget runtime.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in Tableside                             │
//! │                                                                         │
//! │  submit_order()                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Table path bad? ──── CoreError::InvalidTablePath ──┐                  │
//! │       │                                             │                  │
//! │       ▼                                             ▼                  │
//! │  Endpoint failed? ─── OrderApiError ─────────── WidgetError ──► Host   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Success ── navigate to /order_status/<id>                             │
//! │                                                                         │
//! │  The original client let a failed POST vanish as an unhandled          │
//! │  rejection; here every failure reaches the host as a typed error and   │
//! │  the guest sees a retry notice with the cart intact.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use tableside_core::CoreError;

// =============================================================================
// Order API Error
// =============================================================================

/// Failures talking to the restaurant backend.
#[derive(Debug, Error)]
pub enum OrderApiError {
    /// Transport-level failure: connect refused, timeout, bad TLS, or an
    /// unreadable response body. The reqwest source carries the detail
    /// (`is_timeout()`/`is_connect()`) for hosts that want to distinguish.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered, but not with success.
    #[error("order endpoint returned HTTP {status}")]
    UnexpectedStatus { status: u16 },

    /// The waiter was called again within the backend's cooldown window.
    ///
    /// ## When This Occurs
    /// `POST /call_waiter/<id>` answers 403 when less than three minutes
    /// have passed since the previous call from the same order.
    #[error("waiter was called too recently, wait a moment before calling again")]
    WaiterCooldown,
}

// =============================================================================
// Widget Error
// =============================================================================

/// Everything `submit_order` (and friends) can fail with - what the host
/// sees.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Domain failure from tableside-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Backend failure from the order gateway.
    #[error(transparent)]
    Api(#[from] OrderApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = OrderApiError::UnexpectedStatus { status: 500 };
        assert_eq!(err.to_string(), "order endpoint returned HTTP 500");
    }

    #[test]
    fn test_core_error_passes_through() {
        let err = WidgetError::from(CoreError::InvalidTablePath {
            path: "/menu/".to_string(),
        });
        assert_eq!(err.to_string(), "no table number in page path: /menu/");
    }
}
