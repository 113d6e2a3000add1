//! Catalog page: filterable, searchable product grid.
//!
//! All filtering runs server-side; this page only swaps the active
//! `BrowseFilter` and re-dispatches `state::catalog::refresh`.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::components::search_bar::SearchBar;
use crate::state::catalog::{self, BrowseFilter, CatalogState};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let catalog_state = expect_context::<RwSignal<CatalogState>>();
    catalog::refresh_categories(catalog_state);
    catalog::refresh(catalog_state);

    let set_filter = move |filter: BrowseFilter| {
        catalog_state.update(|c| c.filter = filter);
        catalog::refresh(catalog_state);
    };

    let on_search = Callback::new(move |query: String| {
        let filter = catalog::normalize_search(&query)
            .map_or(BrowseFilter::All, BrowseFilter::Search);
        set_filter(filter);
    });

    view! {
        <div class="catalog-page">
            <h1>"Catalog"</h1>
            <SearchBar on_search=on_search/>
            <div class="catalog-page__filters">
                <button class="chip" on:click=move |_| set_filter(BrowseFilter::All)>
                    "All"
                </button>
                <button
                    class="chip"
                    on:click=move |_| set_filter(BrowseFilter::SortedByPrice)
                >
                    "Price: low to high"
                </button>
                <button
                    class="chip"
                    on:click=move |_| set_filter(BrowseFilter::PriceBand { min: 0, max: 2_000 })
                >
                    "Under \u{20B9}2,000"
                </button>
                {move || {
                    catalog_state
                        .get()
                        .categories
                        .into_iter()
                        .map(|category| {
                            let id = category.id.clone();
                            view! {
                                <button
                                    class="chip"
                                    on:click=move |_| set_filter(
                                        BrowseFilter::Category(id.clone()),
                                    )
                                >
                                    {category.name}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            {move || {
                let state = catalog_state.get();
                if state.loading {
                    view! { <p class="catalog-page__status">"Loading products..."</p> }
                        .into_any()
                } else if state.products.is_empty() {
                    view! { <p class="catalog-page__status">"No products found."</p> }
                        .into_any()
                } else {
                    view! {
                        <div class="catalog-page__grid">
                            {state
                                .products
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product/> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
