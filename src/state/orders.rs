//! Order history state and display helpers.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{Order, Timestamp};

/// Statuses the admin panel offers when updating an order. The backend
/// treats status as a free-form string; anything outside this list still
/// displays via [`status_label`]'s passthrough.
pub const STATUS_CHOICES: [&str; 4] = ["pending", "shipped", "delivered", "cancelled"];

/// Shared order-history state.
#[derive(Clone, Debug, Default)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub loading: bool,
}

/// Human label for a backend status string.
pub fn status_label(status: &str) -> String {
    match status {
        "pending" => "Pending".to_owned(),
        "shipped" => "Shipped".to_owned(),
        "delivered" => "Delivered".to_owned(),
        "cancelled" => "Cancelled".to_owned(),
        other => other.to_owned(),
    }
}

/// Format a backend timestamp as `12 Mar 2026` (UTC).
pub fn format_order_date(ts: Timestamp) -> String {
    let days = ts / 86_400_000;
    let (year, month, day) = civil_from_days(days);
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    format!("{day} {} {year}", MONTHS[(month - 1) as usize])
}

/// Gregorian date from days since the Unix epoch (Howard Hinnant's
/// civil-from-days construction, non-negative input only).
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };
    (year, month, day)
}

/// Re-fetch the caller's orders into the shared signal.
pub fn refresh(orders: RwSignal<OrdersState>) {
    orders.update(|o| o.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let list = api::get_orders().await;
        orders.update(|o| {
            o.orders = list;
            o.loading = false;
        });
    });
    #[cfg(not(feature = "hydrate"))]
    orders.update(|o| o.loading = false);
}
