//! REST API helpers for communicating with the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning restrictive defaults since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Read queries degrade to the safest restrictive value (`Guest`, `false`,
//! empty list, `None`) instead of surfacing transport errors; only
//! user-initiated mutations return `Result` so callers can show the
//! backend's message verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CartItem, Category, Order, Product, UserProfile, UserRole};
#[cfg(feature = "hydrate")]
use crate::util::backend_error::extract_message;

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(product_id: &str) -> String {
    format!("/api/store/products/{product_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn products_by_category_endpoint(category_id: &str) -> String {
    format!("/api/store/categories/{category_id}/products")
}

#[cfg(any(test, feature = "hydrate"))]
fn product_rating_endpoint(product_id: &str) -> String {
    format!("/api/store/products/{product_id}/rating")
}

#[cfg(any(test, feature = "hydrate"))]
fn price_filter_endpoint(min_price: u64, max_price: u64) -> String {
    format!("/api/store/products/by-price?min={min_price}&max={max_price}")
}

#[cfg(any(test, feature = "hydrate"))]
fn order_endpoint(order_id: &str) -> String {
    format!("/api/store/orders/{order_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn search_endpoint(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{byte:02X}"));
            }
        }
    }
    format!("/api/store/products/search?q={encoded}")
}

/// Fetch a JSON payload, mapping transport and status failures to `None`.
#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(url).send().await.ok()?;
    if !resp.ok() {
        leptos::logging::warn!("GET {} failed: {}", url, resp.status());
        return None;
    }
    resp.json::<T>().await.ok()
}

/// POST a JSON payload and surface the backend's error body on failure.
#[cfg(feature = "hydrate")]
async fn post_json(url: &str, body: &serde_json::Value) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.ok() {
        return Ok(());
    }
    let raw = resp.text().await.unwrap_or_default();
    Err(extract_message(resp.status(), &raw))
}

// --- session / identity -------------------------------------------------

/// Query the caller's role via `GET /api/auth/role`.
///
/// Failures degrade to [`UserRole::Guest`]; callers distinguish "not yet
/// resolved" from "guest" by holding the result in an `Option`.
pub async fn get_caller_user_role() -> UserRole {
    #[cfg(feature = "hydrate")]
    {
        get_json::<UserRole>("/api/auth/role")
            .await
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        UserRole::Guest
    }
}

/// Query whether the caller is an admin via `GET /api/auth/is-admin`.
/// Failures degrade to `false`.
pub async fn is_caller_admin() -> bool {
    #[cfg(feature = "hydrate")]
    {
        get_json::<bool>("/api/auth/is-admin").await.unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Submit an admin activation code via `POST /api/auth/bootstrap-admin`.
///
/// # Errors
///
/// Returns the backend's rejection message verbatim (wrong or already
/// consumed code); single-use enforcement belongs to the backend.
pub async fn bootstrap_admin(code: u32) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/auth/bootstrap-admin",
            &serde_json::json!({ "activation_code": code }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = code;
        Err("not available on server".to_owned())
    }
}

/// Fetch the caller's profile, or `None` when none is saved yet.
pub async fn get_caller_user_profile() -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/auth/profile").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Save the caller's profile via `POST /api/auth/profile`.
///
/// # Errors
///
/// Returns the backend's message if the save is rejected.
pub async fn save_caller_user_profile(profile: &UserProfile) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(profile).map_err(|e| e.to_string())?;
        post_json("/api/auth/profile", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = profile;
        Err("not available on server".to_owned())
    }
}

/// Assign a role to a user by principal id via `POST /api/admin/roles`.
///
/// # Errors
///
/// Returns the backend's message if the caller lacks admin rights.
pub async fn assign_user_role(user_id: &str, role: UserRole) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/admin/roles",
            &serde_json::json!({ "user_id": user_id, "role": role }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, role);
        Err("not available on server".to_owned())
    }
}

// --- catalog ------------------------------------------------------------

/// Fetch the full product list; empty on failure.
pub async fn get_products() -> Vec<Product> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/store/products").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch a single product by id.
pub async fn get_product(product_id: &str) -> Option<Product> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&product_endpoint(product_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        None
    }
}

/// Fetch the products of one category; empty on failure.
pub async fn get_products_by_category(category_id: &str) -> Vec<Product> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&products_by_category_endpoint(category_id))
            .await
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = category_id;
        Vec::new()
    }
}

/// Full-text product search; empty for a blank query or on failure.
pub async fn search_products(text: &str) -> Vec<Product> {
    #[cfg(feature = "hydrate")]
    {
        if text.is_empty() {
            return Vec::new();
        }
        get_json(&search_endpoint(text)).await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Vec::new()
    }
}

/// Fetch products within an inclusive price band; empty on failure.
pub async fn get_products_filtered_by_price(min_price: u64, max_price: u64) -> Vec<Product> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&price_filter_endpoint(min_price, max_price))
            .await
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (min_price, max_price);
        Vec::new()
    }
}

/// Fetch the product list sorted by ascending price; empty on failure.
pub async fn get_products_sorted_by_price() -> Vec<Product> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/store/products/sorted-by-price")
            .await
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch all categories; empty on failure.
pub async fn get_categories() -> Vec<Category> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/store/categories").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch the best-selling product, if the store has sales yet.
pub async fn get_best_selling_product() -> Option<Product> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/store/products/best-selling").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch a product's aggregated rating (0 when unrated or on failure).
pub async fn get_product_rating(product_id: &str) -> u64 {
    #[cfg(feature = "hydrate")]
    {
        get_json(&product_rating_endpoint(product_id))
            .await
            .unwrap_or(0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        0
    }
}

/// Submit a rating for a product.
///
/// # Errors
///
/// Returns the backend's message if the rating is rejected.
pub async fn add_rating(product_id: &str, rating: u64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            &product_rating_endpoint(product_id),
            &serde_json::json!({ "rating": rating }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (product_id, rating);
        Err("not available on server".to_owned())
    }
}

/// Create a product via `POST /api/admin/products`, returning its id.
///
/// # Errors
///
/// Returns the backend's message if creation is rejected.
pub async fn add_product(product: &Product) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(product).map_err(|e| e.to_string())?;
        let resp = gloo_net::http::Request::post("/api/admin/products")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let raw = resp.text().await.unwrap_or_default();
            return Err(extract_message(resp.status(), &raw));
        }
        #[derive(serde::Deserialize)]
        struct CreatedResponse {
            id: String,
        }
        let created: CreatedResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(created.id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product;
        Err("not available on server".to_owned())
    }
}

/// Create a category via `POST /api/admin/categories`.
///
/// # Errors
///
/// Returns the backend's message if creation is rejected.
pub async fn add_category(name: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/admin/categories", &serde_json::json!({ "name": name })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err("not available on server".to_owned())
    }
}

// --- cart / orders / wishlist -------------------------------------------

/// Fetch the caller's cart; empty on failure.
pub async fn get_cart() -> Vec<CartItem> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/store/cart").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Add `quantity` units of a product to the cart.
///
/// # Errors
///
/// Returns the backend's message if the add is rejected.
pub async fn add_to_cart(product_id: &str, quantity: u64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/store/cart",
            &serde_json::json!({ "product_id": product_id, "quantity": quantity }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (product_id, quantity);
        Err("not available on server".to_owned())
    }
}

/// Remove a product line from the cart.
///
/// # Errors
///
/// Returns the backend's message if the remove is rejected.
pub async fn remove_from_cart(product_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/store/cart/remove",
            &serde_json::json!({ "product_id": product_id }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        Err("not available on server".to_owned())
    }
}

/// Clear the whole cart.
///
/// # Errors
///
/// Returns the backend's message if the clear is rejected.
pub async fn clear_cart() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/store/cart/clear", &serde_json::json!({})).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Convert the cart into an order; the backend prices and empties it.
///
/// # Errors
///
/// Returns the backend's message if checkout is rejected (e.g. guest caller
/// or empty cart).
pub async fn checkout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/store/checkout", &serde_json::json!({})).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the caller's orders (all orders for an admin); empty on failure.
pub async fn get_orders() -> Vec<Order> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/store/orders").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch one order by id.
pub async fn get_order(order_id: &str) -> Option<Order> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&order_endpoint(order_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = order_id;
        None
    }
}

/// Update an order's status (admin only).
///
/// # Errors
///
/// Returns the backend's message if the update is rejected.
pub async fn update_order_status(order_id: &str, status: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            &format!("{}/status", order_endpoint(order_id)),
            &serde_json::json!({ "status": status }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (order_id, status);
        Err("not available on server".to_owned())
    }
}

/// Fetch the caller's wishlist product ids; empty on failure.
pub async fn get_wishlist() -> Vec<String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/store/wishlist").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Add a product to the caller's wishlist.
///
/// # Errors
///
/// Returns the backend's message if the add is rejected.
pub async fn add_to_wishlist(product_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/store/wishlist",
            &serde_json::json!({ "product_id": product_id }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        Err("not available on server".to_owned())
    }
}
