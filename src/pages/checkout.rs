//! Checkout page: address -> payment -> review, then order placement.
//!
//! The shipping address is saved onto the caller's profile before checkout
//! so the backend's order record and future checkouts see it. Order
//! placement itself is one backend call; the cart is priced and emptied
//! server-side.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::components::require_auth::RequireAuth;
use crate::components::upi_payment_panel::UpiPaymentPanel;
use crate::net::types::Product;
use crate::state::cart::{self, CartState};
use crate::state::profile::{self, ProfileState};
use crate::util::currency::format_inr;

/// Payment options offered at checkout. UPI renders the deep-link panel;
/// both place the same backend order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum PaymentMethod {
    #[default]
    CashOnDelivery,
    Upi,
}

/// Validate the address step before allowing progression.
pub(crate) fn validate_address(input: &str) -> Result<String, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err("Please enter a shipping address")
    } else {
        Ok(trimmed.to_owned())
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart_state = expect_context::<RwSignal<CartState>>();
    let profile_state = expect_context::<RwSignal<ProfileState>>();
    let products = RwSignal::new(Vec::<Product>::new());

    cart::refresh(cart_state);
    profile::refresh(profile_state);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        products.set(api::get_products().await);
    });

    let step = RwSignal::new(1u8);
    let address = RwSignal::new(String::new());
    let payment = RwSignal::new(PaymentMethod::default());
    let notice = RwSignal::new(String::new());
    let placing = RwSignal::new(false);

    let subtotal =
        move || cart::subtotal(&cart::join_lines(&cart_state.get().items, &products.get()));

    let on_continue_to_payment = move |_| match validate_address(&address.get()) {
        Ok(normalized) => {
            address.set(normalized);
            notice.set(String::new());
            step.set(2);
        }
        Err(message) => notice.set(message.to_owned()),
    };

    let on_place_order = move |_| {
        if placing.get() {
            return;
        }
        let shipping = match validate_address(&address.get()) {
            Ok(shipping) => shipping,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        };
        placing.set(true);
        notice.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Persist the address first so the order ships to it.
            let mut profile = profile_state
                .get_untracked()
                .profile
                .unwrap_or_default();
            profile.address = shipping;
            if let Err(e) = api::save_caller_user_profile(&profile).await {
                notice.set(e);
                placing.set(false);
                return;
            }
            match api::checkout().await {
                Ok(()) => {
                    cart::refresh(cart_state);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/orders");
                    }
                }
                Err(e) => {
                    notice.set(e);
                    placing.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = shipping;
            placing.set(false);
        }
    };

    view! {
        <RequireAuth message="Please sign in to checkout">
            <div class="checkout-page">
                <a class="button button--small" href="/cart">
                    "Back to Cart"
                </a>
                <h1>"Checkout"</h1>
                <ol class="checkout-page__stepper">
                    <li class:active={move || step.get() >= 1}>"Address"</li>
                    <li class:active={move || step.get() >= 2}>"Payment"</li>
                    <li class:active={move || step.get() >= 3}>"Review"</li>
                </ol>

                <Show when=move || step.get() == 1>
                    <section class="checkout-page__step">
                        <h2>"Shipping Address"</h2>
                        <textarea
                            class="checkout-page__address"
                            placeholder="Enter your complete address"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        ></textarea>
                        <button class="button button--primary" on:click=on_continue_to_payment>
                            "Continue to Payment"
                        </button>
                    </section>
                </Show>

                <Show when=move || step.get() == 2>
                    <section class="checkout-page__step">
                        <h2>"Payment Method"</h2>
                        <label>
                            <input
                                type="radio"
                                name="payment"
                                checked=move || payment.get() == PaymentMethod::CashOnDelivery
                                on:change=move |_| payment.set(PaymentMethod::CashOnDelivery)
                            />
                            "Cash on Delivery"
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="payment"
                                checked=move || payment.get() == PaymentMethod::Upi
                                on:change=move |_| payment.set(PaymentMethod::Upi)
                            />
                            "UPI"
                        </label>
                        <Show when=move || payment.get() == PaymentMethod::Upi>
                            {move || view! { <UpiPaymentPanel amount=subtotal()/> }}
                        </Show>
                        <button class="button button--primary" on:click=move |_| step.set(3)>
                            "Review Order"
                        </button>
                    </section>
                </Show>

                <Show when=move || step.get() == 3>
                    <section class="checkout-page__step">
                        <h2>"Review"</h2>
                        <p>"Deliver to: " {move || address.get()}</p>
                        <p>"Total: " {move || format_inr(subtotal())}</p>
                        <button
                            class="button button--primary"
                            disabled=move || placing.get()
                            on:click=on_place_order
                        >
                            {move || if placing.get() { "Placing Order..." } else { "Place Order" }}
                        </button>
                    </section>
                </Show>

                <Show when=move || !notice.get().is_empty()>
                    <p class="checkout-page__notice">{move || notice.get()}</p>
                </Show>
            </div>
        </RequireAuth>
    }
}
