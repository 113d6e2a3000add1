use super::*;
use crate::net::types::sample_product;

#[test]
fn join_preserves_wishlist_order() {
    let products = [
        sample_product("p1", "c", 100),
        sample_product("p2", "c", 200),
        sample_product("p3", "c", 300),
    ];
    let ids = ["p3".to_owned(), "p1".to_owned()];
    let resolved = wishlist_products(&ids, &products);
    assert_eq!(
        resolved.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        ["p3", "p1"]
    );
}

#[test]
fn join_drops_ids_missing_from_the_catalog() {
    let products = [sample_product("p1", "c", 100)];
    let ids = ["p1".to_owned(), "gone".to_owned()];
    assert_eq!(wishlist_products(&ids, &products).len(), 1);
}

#[test]
fn contains_matches_exact_ids() {
    let ids = ["p1".to_owned(), "p2".to_owned()];
    assert!(contains(&ids, "p2"));
    assert!(!contains(&ids, "p20"));
}
