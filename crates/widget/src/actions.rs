//! Explicit cart action dispatch.
//!
//! The host page translates its control events (trash button, +/- buttons,
//! quantity input change) into a [`CartAction`] plus the item identifier
//! recovered from the control, and hands both to [`CartWidget::apply`].
//! This replaces event-delegation DOM traversal with one typed entry point.

use localcart_core::ItemId;

use crate::cart::CartWidget;
use crate::error::{Result, WidgetError};
use crate::storage::KeyValueStore;
use crate::view::StorefrontView;

/// A user intent against one cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Remove the line entirely.
    Remove,
    /// Increase quantity by one.
    Increment,
    /// Decrease quantity by one, flooring at one.
    Decrement,
    /// Replace the quantity; zero or negative removes the line.
    SetQuantity(i64),
}

impl CartAction {
    /// Build a `SetQuantity` from raw text input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` when the input does not parse as a whole
    /// number; the caller surfaces that and leaves the cart untouched.
    pub fn set_quantity_from_input(input: &str) -> Result<Self> {
        input
            .trim()
            .parse::<i64>()
            .map(Self::SetQuantity)
            .map_err(|_| WidgetError::InvalidQuantity {
                input: input.to_owned(),
            })
    }
}

impl<S: KeyValueStore> CartWidget<S> {
    /// Apply `action` to the line identified by `id`.
    ///
    /// Persists and re-renders exactly like calling the underlying
    /// operation directly.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails.
    pub fn apply(
        &mut self,
        id: &ItemId,
        action: CartAction,
        view: &mut dyn StorefrontView,
    ) -> Result<()> {
        match action {
            CartAction::Remove => self.remove_item(id, view),
            CartAction::Increment => self.increment(id, view),
            CartAction::Decrement => self.decrement(id, view),
            CartAction::SetQuantity(n) => self.set_quantity(id, n, view),
        }
    }
}
