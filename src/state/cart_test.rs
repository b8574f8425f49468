use super::*;

fn item(name: &str, price: f64) -> CartItem {
    CartItem {
        product_id: Uuid::new_v4(),
        name: name.to_owned(),
        price,
    }
}

#[test]
fn total_is_sum_of_prices_over_add_remove_sequences() {
    let mut cart = CartState::default();
    assert_eq!(cart.total(), 0.0);

    cart.add(item("basic", 9.99));
    cart.add(item("pro", 49.50));
    cart.add(item("basic", 9.99));
    assert_eq!(cart.len(), 3);
    assert!((cart.total() - 69.48).abs() < 1e-9);

    cart.remove(1);
    assert_eq!(cart.len(), 2);
    assert!((cart.total() - 19.98).abs() < 1e-9);

    cart.remove(0);
    cart.remove(0);
    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0.0);
}

#[test]
fn remove_out_of_range_is_ignored() {
    let mut cart = CartState::default();
    cart.add(item("basic", 5.0));
    cart.remove(7);
    assert_eq!(cart.len(), 1);
}

#[test]
fn clear_empties_the_cart() {
    let mut cart = CartState::default();
    cart.add(item("a", 1.0));
    cart.add(item("b", 2.0));
    cart.clear();
    assert!(cart.is_empty());
}

#[test]
fn order_items_are_single_unit_lines() {
    let mut cart = CartState::default();
    let line = item("basic", 12.5);
    let product_id = line.product_id;
    cart.add(line);

    let items = cart.to_order_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_id, product_id);
    assert_eq!(items[0].quantity, 1);
    assert_eq!(items[0].price, 12.5);
}
