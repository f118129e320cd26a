//! Unified error handling for the widget.
//!
//! All widget entry points that can fail return `Result<T, WidgetError>`.
//! Malformed stored records are deliberately *not* errors: they are treated
//! as absent data and logged, so a corrupt entry never wedges the widget.

use thiserror::Error;

use crate::storage::StorageError;

/// Application-level error type for the widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Reading from or writing to the backing store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Quantity input could not be interpreted as a whole number.
    #[error("invalid quantity input: {input:?}")]
    InvalidQuantity {
        /// The raw input as received.
        input: String,
    },
}

/// Result type alias for `WidgetError`.
pub type Result<T> = std::result::Result<T, WidgetError>;
