//! Integration tests for localcart.
//!
//! The tests drive the widget exactly the way an embedding host would:
//! a [`MemoryStore`](localcart_widget::storage::MemoryStore) stands in for
//! browser-local storage and a [`RecordingView`] captures everything the
//! widget asks the page to display.

use localcart_widget::view::{CartView, SessionView, StorefrontView};

/// A view that records every call for later assertions.
#[derive(Debug, Default)]
pub struct RecordingView {
    /// Session states rendered, in order.
    pub sessions: Vec<SessionView>,
    /// Cart states rendered, in order.
    pub carts: Vec<CartView>,
    /// Navigation targets, in order.
    pub navigations: Vec<String>,
    /// Cart panel open/close transitions, in order.
    pub panel_states: Vec<bool>,
}

impl RecordingView {
    /// Create an empty recording view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered session state.
    #[must_use]
    pub fn last_session(&self) -> Option<&SessionView> {
        self.sessions.last()
    }

    /// The most recently rendered cart state.
    #[must_use]
    pub fn last_cart(&self) -> Option<&CartView> {
        self.carts.last()
    }
}

impl StorefrontView for RecordingView {
    fn render_session(&mut self, session: &SessionView) {
        self.sessions.push(session.clone());
    }

    fn render_cart(&mut self, cart: &CartView) {
        self.carts.push(cart.clone());
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_owned());
    }

    fn set_cart_panel_open(&mut self, open: bool) {
        self.panel_states.push(open);
    }
}
