//! Product detail page: full description, rating, cart/wishlist actions.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::Product;
use crate::state::cart::CartState;
use crate::state::session::{self, RoleQuery, SessionFlags};
use crate::util::currency::format_inr;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.read().get("id").unwrap_or_default();

    let product = RwSignal::new(None::<Product>);
    let rating = RwSignal::new(0u64);
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(String::new());
    let cart_state = expect_context::<RwSignal<CartState>>();
    let flags = expect_context::<RwSignal<SessionFlags>>();
    let role_query = expect_context::<RwSignal<RoleQuery>>();
    let signed_in = move || {
        session::resolve_session(&flags.get_untracked(), &role_query.get_untracked()).is_signed_in
    };

    #[cfg(feature = "hydrate")]
    {
        let id = product_id();
        leptos::task::spawn_local(async move {
            product.set(api::get_product(&id).await);
            rating.set(api::get_product_rating(&id).await);
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    let on_add_to_cart = move |_| {
        if !signed_in() {
            notice.set("Please sign in to add items to cart".to_owned());
            return;
        }
        let id = product_id();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::add_to_cart(&id, 1).await {
                Ok(()) => {
                    notice.set("Added to cart".to_owned());
                    crate::state::cart::refresh(cart_state);
                }
                Err(e) => notice.set(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let on_rate = move |stars: u64| {
        if !signed_in() {
            notice.set("Please sign in to rate products".to_owned());
            return;
        }
        let id = product_id();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::add_rating(&id, stars).await {
                Ok(()) => rating.set(api::get_product_rating(&id).await),
                Err(e) => notice.set(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, stars);
    };

    view! {
        <div class="product-detail">
            {move || {
                if loading.get() {
                    return view! { <p>"Loading product..."</p> }.into_any();
                }
                match product.get() {
                    None => view! {
                        <div class="product-detail__missing">
                            <h1>"Product not found"</h1>
                            <a class="button" href="/catalog">
                                "Back to Catalog"
                            </a>
                        </div>
                    }
                    .into_any(),
                    Some(p) => view! {
                        <article class="product-detail__body">
                            {match p.image_url.clone() {
                                Some(url) => {
                                    view! { <img class="product-detail__image" src=url alt=p.title.clone()/> }
                                        .into_any()
                                }
                                None => {
                                    view! { <div class="product-detail__placeholder">"No Image"</div> }
                                        .into_any()
                                }
                            }}
                            <h1>{p.title.clone()}</h1>
                            <p class="product-detail__price">{format_inr(p.price)}</p>
                            <p class="product-detail__rating">
                                {move || {
                                    let r = rating.get();
                                    if r > 0 { format!("Rated {r} / 5") } else { "Not rated yet".to_owned() }
                                }}
                            </p>
                            <p class="product-detail__description">{p.description.clone()}</p>
                            <div class="product-detail__rate">
                                {(1u64..=5)
                                    .map(|stars| view! {
                                        <button
                                            class="product-detail__star"
                                            aria-label=format!("Rate {stars} stars")
                                            on:click=move |_| on_rate(stars)
                                        >
                                            "\u{2605}"
                                        </button>
                                    })
                                    .collect_view()}
                            </div>
                            <button class="button button--primary" on:click=on_add_to_cart>
                                "Add to Cart"
                            </button>
                        </article>
                    }
                    .into_any(),
                }
            }}
            <Show when=move || !notice.get().is_empty()>
                <p class="product-detail__notice">{move || notice.get()}</p>
            </Show>
        </div>
    }
}
