//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `cart`, `catalog`, etc.) so
//! individual components can depend on small focused models. `session` is
//! the authorization core: every guard and every identity-aware component
//! derives its view from that one resolver.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod profile;
pub mod session;
pub mod wishlist;
