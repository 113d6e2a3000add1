//! UPI payment panel shown at checkout.
//!
//! Renders the merchant VPA with a copy affordance and a deep link that
//! hands the payment off to whatever UPI app the OS has installed. No
//! payment state is tracked here; order placement stays a separate action.

use leptos::prelude::*;

use crate::util::upi;

/// UPI payment block for the given amount (whole rupees).
#[component]
pub fn UpiPaymentPanel(
    amount: u64,
    #[prop(optional, into)] reference: Option<String>,
) -> impl IntoView {
    let copied = RwSignal::new(false);
    let deep_link = upi::build_deep_link(amount, Some("Aurum order"), reference.as_deref());

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let clipboard = window.navigator().clipboard();
                let _ = clipboard.write_text(upi::MERCHANT_UPI_ID);
                copied.set(true);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        copied.set(true);
    };

    view! {
        <div class="upi-panel">
            <h3 class="upi-panel__title">"Pay with UPI"</h3>
            <p class="upi-panel__vpa">
                {upi::MERCHANT_UPI_ID}
                <button class="button button--small" on:click=on_copy>
                    {move || if copied.get() { "Copied" } else { "Copy" }}
                </button>
            </p>
            <a class="button button--primary" href=deep_link>
                "Open UPI App"
            </a>
            <p class="upi-panel__hint">
                "Complete the payment in your UPI app, then place the order below."
            </p>
        </div>
    }
}
