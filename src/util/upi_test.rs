use super::*;

#[test]
fn minimal_link_has_required_parameters_only() {
    assert_eq!(
        build_deep_link(0, None, None),
        "upi://pay?pa=aurum%40upi&pn=Aurum+Boutique&cu=INR&mc=5411"
    );
}

#[test]
fn amount_is_rendered_with_two_decimals() {
    let link = build_deep_link(2499, None, None);
    assert!(link.contains("&am=2499.00"), "{link}");
}

#[test]
fn zero_amount_is_omitted() {
    assert!(!build_deep_link(0, None, None).contains("am="));
}

#[test]
fn note_and_reference_are_form_encoded() {
    let link = build_deep_link(100, Some("Order #12"), Some("ord-12"));
    assert!(link.contains("&tn=Order+%2312"), "{link}");
    assert!(link.ends_with("&tr=ord-12"), "{link}");
}

#[test]
fn form_encode_handles_unreserved_and_reserved_bytes() {
    assert_eq!(form_encode("a*b-c.d_e"), "a*b-c.d_e");
    assert_eq!(form_encode("a b"), "a+b");
    assert_eq!(form_encode("a@b"), "a%40b");
}
