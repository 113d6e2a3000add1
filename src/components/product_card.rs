//! Product tile used by the catalog grid, home sections, and wishlist.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::Product;
use crate::state::cart::{self, CartState};
use crate::state::session::{self, RoleQuery, SessionFlags};
use crate::util::currency::format_inr;

/// Card linking to the product detail page, with quick add-to-cart and
/// add-to-wishlist actions. Both actions require a signed-in session and
/// bounce anonymous visitors to the login page.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart_state = expect_context::<RwSignal<CartState>>();
    let flags = expect_context::<RwSignal<SessionFlags>>();
    let role_query = expect_context::<RwSignal<RoleQuery>>();
    let rating = RwSignal::new(0u64);
    let notice = RwSignal::new(String::new());

    let href = format!("/product/{}", product.id);
    let price = format_inr(product.price);
    let size = product.size.clone();
    let has_size = !size.is_empty();

    #[cfg(feature = "hydrate")]
    {
        let product_id = product.id.clone();
        leptos::task::spawn_local(async move {
            rating.set(api::get_product_rating(&product_id).await);
        });
    }

    let require_account = move || {
        let session =
            session::resolve_session(&flags.get_untracked(), &role_query.get_untracked());
        if session.is_signed_in {
            return true;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/account/login");
            }
        }
        false
    };

    let on_add_to_cart = {
        let product_id = product.id.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            if !require_account() {
                return;
            }
            let product_id = product_id.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match api::add_to_cart(&product_id, 1).await {
                    Ok(()) => {
                        notice.set("Added to cart".to_owned());
                        cart::refresh(cart_state);
                    }
                    Err(e) => notice.set(e),
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = product_id;
        }
    };

    let on_add_to_wishlist = {
        let product_id = product.id.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            if !require_account() {
                return;
            }
            let product_id = product_id.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match api::add_to_wishlist(&product_id).await {
                    Ok(()) => notice.set("Added to wishlist".to_owned()),
                    Err(e) => notice.set(e),
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = product_id;
        }
    };

    view! {
        <a class="product-card" href=href>
            <div class="product-card__image">
                {match product.image_url.clone() {
                    Some(url) => view! { <img src=url alt=product.title.clone()/> }.into_any(),
                    None => view! { <div class="product-card__placeholder">"No Image"</div> }.into_any(),
                }}
                <button
                    class="product-card__wishlist"
                    aria-label="Add to wishlist"
                    on:click=on_add_to_wishlist
                >
                    "\u{2661}"
                </button>
            </div>
            <div class="product-card__body">
                <h3 class="product-card__title">{product.title.clone()}</h3>
                <span class="product-card__rating">
                    {move || {
                        let r = rating.get();
                        if r > 0 { format!("\u{2605} {r}") } else { "New".to_owned() }
                    }}
                </span>
                <p class="product-card__price">{price}</p>
                <Show when=move || has_size>
                    <p class="product-card__size">"Size: " {size.clone()}</p>
                </Show>
            </div>
            <button class="button button--primary" on:click=on_add_to_cart>
                "Add to Cart"
            </button>
            <Show when=move || !notice.get().is_empty()>
                <p class="product-card__notice">{move || notice.get()}</p>
            </Show>
        </a>
    }
}
