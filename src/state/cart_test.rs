use super::*;
use crate::net::types::sample_product;

fn item(product_id: &str, quantity: u64) -> CartItem {
    CartItem {
        product_id: product_id.to_owned(),
        quantity,
    }
}

#[test]
fn join_drops_lines_for_unknown_products() {
    let products = [sample_product("p1", "c1", 100)];
    let items = [item("p1", 2), item("gone", 1)];
    let lines = join_lines(&items, &products);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].product.id, "p1");
    assert_eq!(lines[0].quantity, 2);
}

#[test]
fn line_total_multiplies_price_by_quantity() {
    let line = CartLine {
        product: sample_product("p1", "c1", 2_499),
        quantity: 3,
    };
    assert_eq!(line.total(), 7_497);
}

#[test]
fn subtotal_sums_all_lines() {
    let products = [sample_product("p1", "c1", 100), sample_product("p2", "c1", 250)];
    let items = [item("p1", 2), item("p2", 1)];
    assert_eq!(subtotal(&join_lines(&items, &products)), 450);
}

#[test]
fn subtotal_of_empty_cart_is_zero() {
    assert_eq!(subtotal(&[]), 0);
}

#[test]
fn item_count_sums_quantities() {
    assert_eq!(item_count(&[item("p1", 2), item("p2", 3)]), 5);
    assert_eq!(item_count(&[]), 0);
}
