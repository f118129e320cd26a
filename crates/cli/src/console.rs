//! Console rendering of widget views.

#![allow(clippy::print_stdout)]

use localcart_widget::view::{CartView, SessionView, StorefrontView};

/// Renders widget views as plain terminal output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleView;

impl StorefrontView for ConsoleView {
    fn render_session(&mut self, session: &SessionView) {
        if session.logged_in {
            let name = session.display_name.as_deref().unwrap_or_default();
            println!("Signed in as {name}");
        } else {
            println!("Not signed in");
        }
    }

    fn render_cart(&mut self, cart: &CartView) {
        if cart.lines.is_empty() {
            println!("Your cart is empty");
        } else {
            for line in &cart.lines {
                println!(
                    "  {:<12} {:<24} {:>3} x {:>8} = {:>8}",
                    line.id, line.name, line.quantity, line.unit_price, line.line_total
                );
            }
        }
        println!("Items:    {}", cart.item_count);
        println!("Subtotal: {}", cart.subtotal);
        println!("Shipping: {}", cart.shipping);
        println!("Total:    {}", cart.total);
        if !cart.checkout_enabled {
            println!("(checkout disabled)");
        }
    }

    fn navigate(&mut self, url: &str) {
        println!("-> {url}");
    }
}
