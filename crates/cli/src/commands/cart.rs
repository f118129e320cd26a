//! Cart commands.

use rust_decimal::Decimal;

use localcart_core::{ItemId, Price};
use localcart_widget::actions::CartAction;
use localcart_widget::cart::{CartWidget, LineItem};
use localcart_widget::config::WidgetConfig;
use localcart_widget::storage::JsonFileStore;

use crate::console::ConsoleView;

fn load_widget() -> Result<CartWidget<JsonFileStore>, Box<dyn std::error::Error>> {
    let config = WidgetConfig::from_env()?;
    Ok(CartWidget::load(super::open_store()?, &config))
}

/// Render the current cart.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let widget = load_widget()?;
    widget.render(&mut ConsoleView);
    Ok(())
}

/// Add an item; an existing id bumps that line's quantity.
pub fn add(
    id: &str,
    name: String,
    price: &str,
    quantity: u32,
    image: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let price = price
        .parse::<Decimal>()
        .map_err(|e| format!("invalid price {price:?}: {e}"))?;

    let mut widget = load_widget()?;
    widget.add_item(
        LineItem {
            id: ItemId::new(id),
            name,
            price: Price::new(price),
            quantity,
            image,
        },
        &mut ConsoleView,
    )?;
    Ok(())
}

/// Remove an item.
pub fn remove(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    apply(id, CartAction::Remove)
}

/// Increase an item's quantity by one.
pub fn increment(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    apply(id, CartAction::Increment)
}

/// Decrease an item's quantity by one, flooring at one.
pub fn decrement(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    apply(id, CartAction::Decrement)
}

/// Set an item's quantity from raw input; zero or negative removes it.
pub fn set_quantity(id: &str, quantity: &str) -> Result<(), Box<dyn std::error::Error>> {
    apply(id, CartAction::set_quantity_from_input(quantity)?)
}

/// Persist the cart and formatted total, then hand off to checkout.
pub fn checkout() -> Result<(), Box<dyn std::error::Error>> {
    let mut widget = load_widget()?;
    widget.checkout(&mut ConsoleView)?;
    Ok(())
}

fn apply(id: &str, action: CartAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut widget = load_widget()?;
    widget.apply(&ItemId::new(id), action, &mut ConsoleView)?;
    Ok(())
}
