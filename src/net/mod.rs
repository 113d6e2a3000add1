//! Network layer: typed backend client and wire DTOs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every remote operation the storefront depends on goes through `api`, so
//! pages and state modules never touch HTTP or serialization directly.

pub mod api;
pub mod types;
