//! The shopping-cart widget.
//!
//! One in-memory ordered list of line items, mirrored to the backing store
//! after every mutation and re-rendered through the view before control
//! returns to the caller. There is no cross-tab sync: the list is
//! deserialized fresh at load and owned exclusively from then on.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use localcart_core::{ItemId, Price};

use crate::config::WidgetConfig;
use crate::error::{Result, WidgetError};
use crate::storage::{self, KeyValueStore, keys};
use crate::view::{CartLineView, CartView, StorefrontView};

/// One product entry in the cart.
///
/// Invariant: `quantity >= 1` while the item is present. An item reduced to
/// quantity zero is removed, never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub image: String,
}

impl LineItem {
    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// Derived cart amounts. Computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Total quantity across all lines.
    pub item_count: u32,
    /// Sum of price × quantity for all lines.
    pub subtotal: Price,
    /// Flat surcharge iff the subtotal is positive, else zero.
    pub shipping: Price,
    /// Subtotal plus shipping.
    pub total: Price,
}

/// The cart widget state.
pub struct CartWidget<S> {
    store: S,
    lines: Vec<LineItem>,
    shipping_flat_rate: Price,
    checkout_url: String,
}

impl<S: KeyValueStore> CartWidget<S> {
    /// Load the cart from `store`.
    ///
    /// An absent or malformed stored cart yields an empty list; a
    /// storage-read failure is logged and also yields an empty list, so
    /// page startup never fails on cart state.
    pub fn load(store: S, config: &WidgetConfig) -> Self {
        let lines = storage::get_json(&store, keys::CART)
            .unwrap_or_else(|e| {
                warn!(error = %e, "failed to read stored cart");
                None
            })
            .unwrap_or_default();
        Self {
            store,
            lines,
            shipping_flat_rate: config.shipping_flat_rate,
            checkout_url: config.checkout_url.clone(),
        }
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add an item to the cart.
    ///
    /// An item with an id already present bumps that line's quantity by the
    /// added amount; a new id appends a line.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` for a zero-quantity item, or a storage
    /// error if persisting fails.
    pub fn add_item(&mut self, item: LineItem, view: &mut dyn StorefrontView) -> Result<()> {
        if item.quantity == 0 {
            return Err(WidgetError::InvalidQuantity {
                input: "0".to_string(),
            });
        }
        if let Some(line) = self.find_mut(&item.id) {
            line.quantity = line.quantity.saturating_add(item.quantity);
        } else {
            debug!(id = %item.id, "added cart line");
            self.lines.push(item);
        }
        self.commit(view)
    }

    /// Remove the item with matching id, if present.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails.
    pub fn remove_item(&mut self, id: &ItemId, view: &mut dyn StorefrontView) -> Result<()> {
        self.lines.retain(|line| line.id != *id);
        self.commit(view)
    }

    /// Increase the quantity of the item with matching id by one.
    ///
    /// A no-op for an unknown id (still persists and re-renders).
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails.
    pub fn increment(&mut self, id: &ItemId, view: &mut dyn StorefrontView) -> Result<()> {
        if let Some(line) = self.find_mut(id) {
            line.quantity = line.quantity.saturating_add(1);
        }
        self.commit(view)
    }

    /// Decrease the quantity of the item with matching id by one, flooring
    /// at one.
    ///
    /// Decrementing a quantity-1 item has no effect; removal goes through
    /// [`Self::remove_item`] or [`Self::set_quantity`].
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails.
    pub fn decrement(&mut self, id: &ItemId, view: &mut dyn StorefrontView) -> Result<()> {
        if let Some(line) = self.find_mut(id)
            && line.quantity > 1
        {
            line.quantity -= 1;
        }
        self.commit(view)
    }

    /// Set the quantity of the item with matching id.
    ///
    /// A positive `quantity` replaces the line's quantity, clamped at
    /// `u32::MAX`; only zero or negative removes the item.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails.
    pub fn set_quantity(
        &mut self,
        id: &ItemId,
        quantity: i64,
        view: &mut dyn StorefrontView,
    ) -> Result<()> {
        if quantity <= 0 {
            return self.remove_item(id, view);
        }
        let n = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.find_mut(id) {
            line.quantity = n;
        }
        self.commit(view)
    }

    /// Compute the derived amounts for the current lines.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let item_count = self.lines.iter().map(|line| line.quantity).sum();
        let subtotal: Price = self.lines.iter().map(LineItem::line_total).sum();
        let shipping = if subtotal.is_zero() {
            Price::ZERO
        } else {
            self.shipping_flat_rate
        };
        CartTotals {
            item_count,
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    /// Build the display data for the current lines.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        let totals = self.totals();
        CartView {
            lines: self
                .lines
                .iter()
                .map(|line| CartLineView {
                    id: line.id.clone(),
                    name: line.name.clone(),
                    image: line.image.clone(),
                    unit_price: line.price.display(),
                    quantity: line.quantity,
                    line_total: line.line_total().display(),
                })
                .collect(),
            item_count: totals.item_count,
            subtotal: totals.subtotal.display(),
            shipping: totals.shipping.display(),
            total: totals.total.display(),
            checkout_enabled: !self.lines.is_empty(),
        }
    }

    /// Rebuild the visible cart from the in-memory state.
    pub fn render(&self, view: &mut dyn StorefrontView) {
        view.render_cart(&self.cart_view());
    }

    /// Open the cart panel, re-rendering first so it shows current state.
    pub fn open_panel(&self, view: &mut dyn StorefrontView) {
        self.render(view);
        view.set_cart_panel_open(true);
    }

    /// Close the cart panel.
    pub fn close_panel(&self, view: &mut dyn StorefrontView) {
        view.set_cart_panel_open(false);
    }

    /// Checkout handoff: persist the cart and the display-formatted total,
    /// then navigate to the checkout page.
    ///
    /// The total string is written verbatim under its own key for the
    /// checkout page to read back.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails.
    pub fn checkout(&mut self, view: &mut dyn StorefrontView) -> Result<()> {
        self.persist()?;
        let total = self.totals().total.display();
        self.store.set(keys::CART_TOTAL, &total)?;
        debug!(total, "checkout handoff");
        view.navigate(&self.checkout_url);
        Ok(())
    }

    /// Access the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn find_mut(&mut self, id: &ItemId) -> Option<&mut LineItem> {
        self.lines.iter_mut().find(|line| line.id == *id)
    }

    /// Persist then re-render. Every mutation funnels through here before
    /// returning control to the caller.
    fn commit(&mut self, view: &mut dyn StorefrontView) -> Result<()> {
        self.persist()?;
        self.render(view);
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        storage::set_json(&mut self.store, keys::CART, &self.lines)?;
        Ok(())
    }
}
