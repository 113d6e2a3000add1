//! Wire DTOs for the storefront backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's response payloads field-for-field so
//! serde round-trips stay lossless and the `api` module can stay
//! schema-driven. Identifiers are backend-issued opaque strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Backend-issued product identifier.
pub type ProductId = String;
/// Backend-issued category identifier.
pub type CategoryId = String;
/// Backend-issued order identifier.
pub type OrderId = String;
/// Milliseconds since the Unix epoch, as reported by the backend.
pub type Timestamp = u64;

/// Access tier assigned to the caller by the backend.
///
/// Absence of a resolved role (query still in flight or failed) is
/// represented as `Option::<UserRole>::None` by callers, never as `Guest`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    #[default]
    Guest,
}

impl UserRole {
    /// Whether this role counts as a backend-registered account.
    pub fn is_registered(self) -> bool {
        matches!(self, Self::User | Self::Admin)
    }
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Size label (e.g. `"M"`, `"42"`), empty when not applicable.
    #[serde(default)]
    pub size: String,
    /// Long-form description shown on the detail page.
    pub description: String,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Image URL served by the backend's blob store, if an image was uploaded.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Price in whole rupees.
    pub price: u64,
}

/// A product category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

/// One line of the caller's cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Number of units; the backend never stores zero-quantity lines.
    pub quantity: u64,
}

/// A placed order as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Free-form status string owned by the backend (e.g. `"pending"`,
    /// `"shipped"`, `"delivered"`).
    pub status: String,
    /// Order total in whole rupees, priced by the backend at checkout time.
    pub total: u64,
    /// Identifier of the ordering user.
    pub user_id: String,
    /// Creation time.
    pub created_at: Timestamp,
    /// Snapshot of the cart lines at checkout.
    #[serde(default)]
    pub items: Vec<CartItem>,
}

/// The caller's editable profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Shipping address, updated from checkout.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
}

#[cfg(test)]
pub(crate) fn sample_product(id: &str, category: &str, price: u64) -> Product {
    Product {
        id: id.to_owned(),
        title: format!("Product {id}"),
        size: String::new(),
        description: String::new(),
        category: category.to_owned(),
        image_url: None,
        price,
    }
}
