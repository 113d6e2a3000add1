use super::*;

#[test]
fn address_is_trimmed_and_required() {
    assert_eq!(
        validate_address("  12 MG Road, Bengaluru  "),
        Ok("12 MG Road, Bengaluru".to_owned())
    );
    assert_eq!(validate_address(""), Err("Please enter a shipping address"));
    assert_eq!(validate_address("   "), Err("Please enter a shipping address"));
}

#[test]
fn default_payment_method_is_cash_on_delivery() {
    assert_eq!(PaymentMethod::default(), PaymentMethod::CashOnDelivery);
}
