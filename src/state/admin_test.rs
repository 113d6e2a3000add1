use super::*;
use crate::net::types::CartItem;

#[test]
fn four_ascii_digits_parse_to_the_unsigned_value() {
    assert_eq!(parse_activation_code("1234"), Ok(1234));
    assert_eq!(parse_activation_code("0042"), Ok(42));
    assert_eq!(parse_activation_code("  7777  "), Ok(7777));
}

#[test]
fn mixed_alphanumeric_code_is_rejected() {
    assert_eq!(parse_activation_code("12a4"), Err(CODE_SHAPE_ERROR.to_owned()));
}

#[test]
fn wrong_lengths_are_rejected() {
    assert_eq!(parse_activation_code(""), Err(CODE_SHAPE_ERROR.to_owned()));
    assert_eq!(parse_activation_code("123"), Err(CODE_SHAPE_ERROR.to_owned()));
    assert_eq!(parse_activation_code("12345"), Err(CODE_SHAPE_ERROR.to_owned()));
}

#[test]
fn signs_and_interior_spaces_are_rejected() {
    assert_eq!(parse_activation_code("+123"), Err(CODE_SHAPE_ERROR.to_owned()));
    assert_eq!(parse_activation_code("-123"), Err(CODE_SHAPE_ERROR.to_owned()));
    assert_eq!(parse_activation_code("1 23"), Err(CODE_SHAPE_ERROR.to_owned()));
}

#[test]
fn non_ascii_digits_are_rejected() {
    // Devanagari digits satisfy char::is_numeric but not the 4-ASCII-digit rule.
    assert_eq!(
        parse_activation_code("\u{0967}\u{0968}\u{0969}\u{096A}"),
        Err(CODE_SHAPE_ERROR.to_owned())
    );
}

fn order(status: &str, total: u64) -> Order {
    Order {
        id: "o".to_owned(),
        status: status.to_owned(),
        total,
        user_id: "u".to_owned(),
        created_at: 0,
        items: vec![CartItem {
            product_id: "p".to_owned(),
            quantity: 1,
        }],
    }
}

#[test]
fn dashboard_metrics_aggregate_orders() {
    let orders = [
        order("pending", 1_000),
        order("shipped", 2_500),
        order("pending", 400),
    ];
    let metrics = dashboard_metrics(&orders);
    assert_eq!(metrics.order_count, 3);
    assert_eq!(metrics.pending_count, 2);
    assert_eq!(metrics.revenue, 3_900);
}

#[test]
fn dashboard_metrics_handle_empty_history() {
    assert_eq!(dashboard_metrics(&[]), DashboardMetrics::default());
}
