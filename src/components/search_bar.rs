//! Catalog search input.

use leptos::prelude::*;

/// Search box that reports the submitted query to its owner; the owner
/// decides which backend query to dispatch.
#[component]
pub fn SearchBar(on_search: Callback<String>) -> impl IntoView {
    let query = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search.run(query.get());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                class="search-bar__input"
                type="search"
                placeholder="Search products..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button class="button" type="submit">
                "Search"
            </button>
        </form>
    }
}
