//! Integration tests for the cart widget.
//!
//! Drive mutations through the public entry points and assert on both the
//! rendered view and the persisted storage contract.

use localcart_core::{ItemId, Price};
use localcart_integration_tests::RecordingView;
use localcart_widget::actions::CartAction;
use localcart_widget::cart::{CartWidget, LineItem};
use localcart_widget::config::WidgetConfig;
use localcart_widget::storage::{KeyValueStore, MemoryStore, keys};

fn item(id: &str, cents: i64, quantity: u32) -> LineItem {
    LineItem {
        id: ItemId::new(id),
        name: format!("Item {id}"),
        price: Price::from_cents(cents),
        quantity,
        image: format!("{id}.jpg"),
    }
}

fn widget_with(items: Vec<LineItem>) -> CartWidget<MemoryStore> {
    let mut widget = CartWidget::load(MemoryStore::new(), &WidgetConfig::default());
    let mut view = RecordingView::new();
    for it in items {
        widget
            .add_item(it, &mut view)
            .unwrap_or_else(|e| panic!("add_item failed: {e}"));
    }
    widget
}

// =============================================================================
// Derived Totals
// =============================================================================

#[test]
fn test_worked_example_through_view() {
    // cart = [{a, $10 × 2}, {b, $5 × 1}] → 25.00 / 15.00 / 40.00
    let widget = widget_with(vec![item("a", 1000, 2), item("b", 500, 1)]);
    let mut view = RecordingView::new();
    widget.render(&mut view);

    let cart = view.last_cart().expect("cart rendered");
    assert_eq!(cart.item_count, 3);
    assert_eq!(cart.subtotal, "$25.00");
    assert_eq!(cart.shipping, "$15.00");
    assert_eq!(cart.total, "$40.00");
    assert!(cart.checkout_enabled);
}

#[test]
fn test_subtotal_is_sum_over_lines() {
    let widget = widget_with(vec![
        item("a", 199, 3),
        item("b", 2500, 1),
        item("c", 50, 10),
    ]);
    // 5.97 + 25.00 + 5.00 = 35.97
    assert_eq!(widget.totals().subtotal.display(), "$35.97");
    assert_eq!(widget.totals().total.display(), "$50.97");
}

#[test]
fn test_shipping_rate_is_configurable() {
    let config = WidgetConfig {
        shipping_flat_rate: Price::from_cents(500),
        ..WidgetConfig::default()
    };
    let mut widget = CartWidget::load(MemoryStore::new(), &config);
    let mut view = RecordingView::new();
    widget
        .add_item(item("a", 1000, 1), &mut view)
        .expect("add_item");

    assert_eq!(widget.totals().shipping.display(), "$5.00");
    assert_eq!(widget.totals().total.display(), "$15.00");
}

// =============================================================================
// Mutations
// =============================================================================

#[test]
fn test_remove_only_item_disables_checkout() {
    let mut widget = widget_with(vec![item("a", 1000, 2)]);
    let mut view = RecordingView::new();
    widget
        .remove_item(&ItemId::new("a"), &mut view)
        .expect("remove_item");

    let cart = view.last_cart().expect("cart rendered");
    assert!(cart.lines.is_empty());
    assert_eq!(cart.subtotal, "$0.00");
    assert_eq!(cart.shipping, "$0.00");
    assert_eq!(cart.total, "$0.00");
    assert!(!cart.checkout_enabled);
}

#[test]
fn test_increment_isolates_other_lines() {
    let mut widget = widget_with(vec![item("a", 1000, 2), item("b", 500, 4)]);
    let mut view = RecordingView::new();
    widget
        .apply(&ItemId::new("a"), CartAction::Increment, &mut view)
        .expect("apply");

    let quantities: Vec<u32> = widget.lines().iter().map(|l| l.quantity).collect();
    assert_eq!(quantities, vec![3, 4]);
}

#[test]
fn test_decrement_at_one_keeps_quantity_one() {
    let mut widget = widget_with(vec![item("a", 1000, 1)]);
    let mut view = RecordingView::new();
    widget
        .apply(&ItemId::new("a"), CartAction::Decrement, &mut view)
        .expect("apply");

    assert_eq!(widget.lines()[0].quantity, 1);
}

#[test]
fn test_set_quantity_nonpositive_removes_entirely() {
    for n in [0, -1, -100] {
        let mut widget = widget_with(vec![item("a", 1000, 2)]);
        let mut view = RecordingView::new();
        widget
            .apply(&ItemId::new("a"), CartAction::SetQuantity(n), &mut view)
            .expect("apply");
        assert!(widget.is_empty(), "quantity {n} should remove the line");
    }
}

#[test]
fn test_set_quantity_beyond_u32_keeps_line() {
    let mut widget = widget_with(vec![item("a", 1000, 2)]);
    let mut view = RecordingView::new();
    let beyond = i64::from(u32::MAX) + 1;
    widget
        .apply(&ItemId::new("a"), CartAction::SetQuantity(beyond), &mut view)
        .expect("apply");

    assert!(!widget.is_empty(), "positive quantity must never remove");
    assert_eq!(widget.lines()[0].quantity, u32::MAX);
}

#[test]
fn test_open_panel_rerenders_then_opens() {
    let widget = widget_with(vec![item("a", 1000, 2)]);
    let mut view = RecordingView::new();
    widget.open_panel(&mut view);
    widget.close_panel(&mut view);

    assert_eq!(view.panel_states, vec![true, false]);
    assert_eq!(view.last_cart().expect("cart rendered").item_count, 2);
}

#[test]
fn test_invalid_quantity_input_leaves_cart_untouched() {
    let mut widget = widget_with(vec![item("a", 1000, 2)]);
    let mut view = RecordingView::new();

    let err = CartAction::set_quantity_from_input("two").unwrap_err();
    assert!(err.to_string().contains("invalid quantity"));

    // Nothing was applied, nothing re-rendered
    widget.render(&mut view);
    assert_eq!(view.last_cart().expect("cart rendered").lines.len(), 1);
    assert_eq!(widget.lines()[0].quantity, 2);
}

// =============================================================================
// Storage Contract
// =============================================================================

#[test]
fn test_mutation_rerenders_after_persisting() {
    let mut widget = widget_with(vec![item("a", 1000, 1)]);
    let mut view = RecordingView::new();
    widget
        .increment(&ItemId::new("a"), &mut view)
        .expect("increment");

    // The rendered view reflects the same state that was persisted
    let rendered = view.last_cart().expect("cart rendered");
    assert_eq!(rendered.lines[0].quantity, 2);

    let reloaded = CartWidget::load(widget.store().clone(), &WidgetConfig::default());
    assert_eq!(reloaded.lines(), widget.lines());
}

#[test]
fn test_cart_loads_from_legacy_numeric_json() {
    // Earlier storefront builds stored prices as bare JSON numbers
    let mut store = MemoryStore::new();
    store
        .set(
            keys::CART,
            r#"[{"id":"a","name":"Mug","price":10,"quantity":2,"image":"mug.jpg"}]"#,
        )
        .expect("seed store");

    let widget = CartWidget::load(store, &WidgetConfig::default());
    assert_eq!(widget.lines().len(), 1);
    assert_eq!(widget.lines()[0].price, Price::from_cents(1000));
    assert_eq!(widget.totals().subtotal.display(), "$20.00");
}

#[test]
fn test_malformed_stored_cart_starts_empty() {
    let mut store = MemoryStore::new();
    store.set(keys::CART, "{not an array").expect("seed store");

    let widget = CartWidget::load(store, &WidgetConfig::default());
    assert!(widget.is_empty());
}
