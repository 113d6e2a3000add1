//! Admin product management: create categories and products, list stock.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::components::admin_guard::AdminGuard;
use crate::net::types::Product;
use crate::util::currency::format_inr;

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let notice = RwSignal::new(String::new());

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let size = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let new_category = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let reload = move || {
        leptos::task::spawn_local(async move {
            products.set(api::get_products().await);
        });
    };
    #[cfg(feature = "hydrate")]
    reload();

    let on_add_category = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = new_category.get().trim().to_owned();
        if name.is_empty() {
            notice.set("Category name is required".to_owned());
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::add_category(&name).await {
                Ok(()) => {
                    notice.set(format!("Category \"{name}\" created"));
                    new_category.set(String::new());
                }
                Err(e) => notice.set(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = name;
    };

    let on_add_product = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Ok(price_value) = price.get().trim().parse::<u64>() else {
            notice.set("Price must be a whole rupee amount".to_owned());
            return;
        };
        let draft = Product {
            id: String::new(),
            title: title.get().trim().to_owned(),
            size: size.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
            category: category.get().trim().to_owned(),
            image_url: None,
            price: price_value,
        };
        if draft.title.is_empty() || draft.category.is_empty() {
            notice.set("Title and category are required".to_owned());
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::add_product(&draft).await {
                Ok(id) => {
                    notice.set(format!("Product {id} created"));
                    title.set(String::new());
                    price.set(String::new());
                    reload();
                }
                Err(e) => notice.set(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = draft;
    };

    view! {
        <AdminGuard>
            <div class="admin-products">
                <h1>"Products"</h1>
                <form class="admin-products__category-form" on:submit=on_add_category>
                    <input
                        placeholder="New category name"
                        prop:value=move || new_category.get()
                        on:input=move |ev| new_category.set(event_target_value(&ev))
                    />
                    <button class="button" type="submit">
                        "Add Category"
                    </button>
                </form>
                <form class="admin-products__product-form" on:submit=on_add_product>
                    <input
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <input
                        placeholder="Category id"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                    <input
                        placeholder="Size"
                        prop:value=move || size.get()
                        on:input=move |ev| size.set(event_target_value(&ev))
                    />
                    <input
                        placeholder="Price (whole rupees)"
                        inputmode="numeric"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <button class="button button--primary" type="submit">
                        "Add Product"
                    </button>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="admin-products__notice">{move || notice.get()}</p>
                </Show>
                <div class="admin-products__list">
                    {move || {
                        products
                            .get()
                            .into_iter()
                            .map(|product| view! {
                                <div class="admin-products__row">
                                    <span>{product.title.clone()}</span>
                                    <span>{product.category.clone()}</span>
                                    <span>{format_inr(product.price)}</span>
                                </div>
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </AdminGuard>
    }
}
