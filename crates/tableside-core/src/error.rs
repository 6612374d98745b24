//! # Error Types
//!
//! Domain-specific error types for tableside-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tableside-core errors (this file)                                     │
//! │  └── CoreError       - Domain errors (table path parsing)              │
//! │                                                                         │
//! │  tableside-widget errors (separate crate)                              │
//! │  ├── OrderApiError   - Order endpoint failures                         │
//! │  └── WidgetError     - What the host sees (core ∪ api)                 │
//! │                                                                         │
//! │  Flow: CoreError → WidgetError → Host                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutation itself is infallible (adds always succeed, a remove miss is
//! a silent no-op), so the domain error surface is deliberately small.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The page path does not end in a table number.
    ///
    /// ## When This Occurs
    /// - The widget is mounted outside a `/menu/<table>` page
    /// - The path has a trailing slash, leaving an empty final segment
    ///
    /// The original client parsed the segment with `parseInt` and silently
    /// posted `table_id: null` on failure; here the order is refused before
    /// the guest is even asked to confirm.
    #[error("no table number in page path: {path}")]
    InvalidTablePath { path: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidTablePath {
            path: "/menu/".to_string(),
        };
        assert_eq!(err.to_string(), "no table number in page path: /menu/");
    }
}
