//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers. The three
//! access guards live here; they are thin wrappers over
//! `state::session::resolve_session` and never re-derive precedence logic.

pub mod admin_guard;
pub mod app_shell;
pub mod brand_header;
pub mod guest_banner;
pub mod loading_indicator;
pub mod login_button;
pub mod mobile_bottom_nav;
pub mod product_card;
pub mod product_section;
pub mod require_auth;
pub mod require_sign_in;
pub mod search_bar;
pub mod sign_in_prompt;
pub mod upi_payment_panel;
