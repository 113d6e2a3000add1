use super::*;

#[test]
fn user_role_uses_lowercase_wire_strings() {
    assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&UserRole::Guest).unwrap(), "\"guest\"");

    let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, UserRole::Admin);
}

#[test]
fn user_role_defaults_to_guest() {
    assert_eq!(UserRole::default(), UserRole::Guest);
}

#[test]
fn is_registered_covers_user_and_admin_only() {
    assert!(UserRole::User.is_registered());
    assert!(UserRole::Admin.is_registered());
    assert!(!UserRole::Guest.is_registered());
}

#[test]
fn product_deserializes_without_optional_fields() {
    let raw = r#"{
        "id": "p1",
        "title": "Silk Scarf",
        "description": "Hand-rolled hem.",
        "category": "accessories",
        "price": 2499
    }"#;
    let product: Product = serde_json::from_str(raw).unwrap();
    assert_eq!(product.id, "p1");
    assert_eq!(product.size, "");
    assert_eq!(product.image_url, None);
    assert_eq!(product.price, 2499);
}

#[test]
fn order_items_default_to_empty() {
    let raw = r#"{
        "id": "o1",
        "status": "pending",
        "total": 4999,
        "user_id": "u1",
        "created_at": 1733000000000
    }"#;
    let order: Order = serde_json::from_str(raw).unwrap();
    assert!(order.items.is_empty());
    assert_eq!(order.status, "pending");
}
