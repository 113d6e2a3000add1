//! Admin elevation flow and dashboard aggregates.
//!
//! SYSTEM CONTEXT
//! ==============
//! Elevation submits a one-time numeric code to the backend; the code's
//! single-use guarantee is entirely the backend's. The client validates the
//! shape (exactly 4 ASCII digits) before any network call, then re-fetches
//! the two role-dependent queries so guards reflect the new tier without a
//! reload.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::Order;
use crate::state::session::{AdminQuery, RoleQuery};

/// Shown inline when the entered code has the wrong shape; no network call
/// is made in that case.
pub const CODE_SHAPE_ERROR: &str = "Activation code must be exactly 4 digits";

/// Progress of one activation attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActivationStatus {
    #[default]
    Idle,
    Submitting,
    Activated,
    /// Client-side validation message or the backend's rejection, verbatim.
    Failed(String),
}

/// Validate and parse an activation code: exactly 4 ASCII digits after
/// trimming.
///
/// # Errors
///
/// Returns [`CODE_SHAPE_ERROR`] for any other shape, including signs,
/// spaces, and non-ASCII digits.
pub fn parse_activation_code(input: &str) -> Result<u32, String> {
    let code = input.trim();
    if code.len() != 4 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CODE_SHAPE_ERROR.to_owned());
    }
    code.parse::<u32>().map_err(|_| CODE_SHAPE_ERROR.to_owned())
}

/// Submit an activation code.
///
/// Shape errors fail synchronously without touching the network. On backend
/// success both role-dependent queries are eagerly re-fetched; on backend
/// failure the message is surfaced verbatim and nothing is retried.
pub fn submit_activation(
    status: RwSignal<ActivationStatus>,
    role_query: RwSignal<RoleQuery>,
    admin_query: RwSignal<AdminQuery>,
    input: &str,
) {
    let code = match parse_activation_code(input) {
        Ok(code) => code,
        Err(message) => {
            status.set(ActivationStatus::Failed(message));
            return;
        }
    };
    status.set(ActivationStatus::Submitting);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::bootstrap_admin(code).await {
            Ok(()) => {
                status.set(ActivationStatus::Activated);
                crate::state::session::refresh_role(role_query);
                crate::state::session::refresh_admin(admin_query);
            }
            Err(message) => status.set(ActivationStatus::Failed(message)),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (code, role_query, admin_query);
        status.set(ActivationStatus::Failed("not available on server".to_owned()));
    }
}

/// Aggregates shown on the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub order_count: usize,
    pub pending_count: usize,
    /// Sum of order totals in whole rupees.
    pub revenue: u64,
}

/// Compute dashboard aggregates from the full order list.
pub fn dashboard_metrics(orders: &[Order]) -> DashboardMetrics {
    DashboardMetrics {
        order_count: orders.len(),
        pending_count: orders.iter().filter(|o| o.status == "pending").count(),
        revenue: orders.iter().map(|o| o.total).sum(),
    }
}
