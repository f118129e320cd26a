//! Display values handed to the host presentation layer.
//!
//! The widget never touches the page directly. Every refresh computes plain
//! display data (visibility flags, formatted currency strings, counts) and
//! hands it to a [`StorefrontView`]. A host page that lacks some element
//! simply ignores the corresponding field.

use localcart_core::ItemId;

/// Session display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Show the user dropdown and hide the login link when true.
    pub logged_in: bool,
    /// Name to display in the user dropdown. `Some` iff `logged_in`.
    pub display_name: Option<String>,
}

impl SessionView {
    /// The logged-out view.
    #[must_use]
    pub const fn logged_out() -> Self {
        Self {
            logged_in: false,
            display_name: None,
        }
    }
}

/// One cart row as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: ItemId,
    pub name: String,
    pub image: String,
    /// Formatted unit price (e.g., "$10.00").
    pub unit_price: String,
    pub quantity: u32,
    /// Formatted price × quantity for this row.
    pub line_total: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Total quantity across all lines (the badge count).
    pub item_count: u32,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    /// Checkout controls are enabled iff the cart is non-empty.
    pub checkout_enabled: bool,
}

impl CartView {
    /// The empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            item_count: 0,
            subtotal: "$0.00".to_string(),
            shipping: "$0.00".to_string(),
            total: "$0.00".to_string(),
            checkout_enabled: false,
        }
    }
}

/// The presentation seam between widget logic and the host page.
///
/// Implementations toggle DOM visibility, rewrite text content, print to a
/// console - whatever the host is. The widget calls these with fully
/// computed values and never inspects the result.
pub trait StorefrontView {
    /// Apply session display state (dropdown visibility, display name,
    /// login link visibility).
    fn render_session(&mut self, session: &SessionView);

    /// Rebuild the visible cart (rows, count badge, totals, checkout
    /// enablement).
    fn render_cart(&mut self, cart: &CartView);

    /// Navigate the host page to `url`.
    fn navigate(&mut self, url: &str);

    /// Open or close the cart panel (sidebar and backdrop on a host page).
    ///
    /// Defaults to a no-op for hosts without a panel.
    fn set_cart_panel_open(&mut self, _open: bool) {}
}

/// A view that ignores everything.
///
/// Stands in for a host page where none of the widget's elements exist,
/// which the widget tolerates silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl StorefrontView for NullView {
    fn render_session(&mut self, _session: &SessionView) {}

    fn render_cart(&mut self, _cart: &CartView) {}

    fn navigate(&mut self, _url: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::empty();
        assert!(view.lines.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.total, "$0.00");
        assert!(!view.checkout_enabled);
    }

    #[test]
    fn test_logged_out_session_view() {
        let view = SessionView::logged_out();
        assert!(!view.logged_in);
        assert!(view.display_name.is_none());
    }
}
