use super::*;

#[test]
fn product_endpoint_embeds_id() {
    assert_eq!(product_endpoint("p42"), "/api/store/products/p42");
}

#[test]
fn products_by_category_endpoint_embeds_id() {
    assert_eq!(
        products_by_category_endpoint("sarees"),
        "/api/store/categories/sarees/products"
    );
}

#[test]
fn product_rating_endpoint_embeds_id() {
    assert_eq!(product_rating_endpoint("p1"), "/api/store/products/p1/rating");
}

#[test]
fn price_filter_endpoint_embeds_bounds() {
    assert_eq!(
        price_filter_endpoint(500, 2000),
        "/api/store/products/by-price?min=500&max=2000"
    );
}

#[test]
fn order_endpoint_embeds_id() {
    assert_eq!(order_endpoint("o-9"), "/api/store/orders/o-9");
}

#[test]
fn search_endpoint_passes_unreserved_characters_through() {
    assert_eq!(
        search_endpoint("silk-scarf_2.0~x"),
        "/api/store/products/search?q=silk-scarf_2.0~x"
    );
}

#[test]
fn search_endpoint_percent_encodes_spaces_and_symbols() {
    assert_eq!(
        search_endpoint("silk scarf"),
        "/api/store/products/search?q=silk%20scarf"
    );
    assert_eq!(search_endpoint("a&b"), "/api/store/products/search?q=a%26b");
}

#[test]
fn search_endpoint_percent_encodes_multibyte_input() {
    // Devanagari "sa" is three UTF-8 bytes; each must be encoded separately.
    assert_eq!(
        search_endpoint("\u{0938}"),
        "/api/store/products/search?q=%E0%A4%B8"
    );
}

#[cfg(not(feature = "hydrate"))]
mod non_hydrate_stubs {
    use crate::net::api;
    use crate::net::types::UserRole;

    #[test]
    fn read_queries_degrade_to_restrictive_defaults() {
        futures::executor::block_on(async {
            assert_eq!(api::get_caller_user_role().await, UserRole::Guest);
            assert!(!api::is_caller_admin().await);
            assert!(api::get_products().await.is_empty());
            assert!(api::get_cart().await.is_empty());
            assert!(api::get_caller_user_profile().await.is_none());
        });
    }

    #[test]
    fn mutations_report_unavailable() {
        futures::executor::block_on(async {
            assert!(api::bootstrap_admin(1234).await.is_err());
            assert!(api::checkout().await.is_err());
            assert!(api::add_to_cart("p1", 1).await.is_err());
        });
    }
}
