//! Catalog state: products, categories, and the active browse filter.
//!
//! DESIGN
//! ======
//! Filtering, search, and price sorting are backend queries; this module
//! only records which filter is active and holds the last result set, so
//! the catalog page stays a thin dispatcher.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{Category, CategoryId, Product};

/// Which backend query currently feeds the product grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BrowseFilter {
    /// Plain `get_products`.
    #[default]
    All,
    /// Products of one category.
    Category(CategoryId),
    /// Full-text search.
    Search(String),
    /// Inclusive price band in whole rupees.
    PriceBand { min: u64, max: u64 },
    /// Ascending price sort over the full catalog.
    SortedByPrice,
}

/// Shared catalog state.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub filter: BrowseFilter,
    pub loading: bool,
}

/// Look up a category's display name, falling back to its id.
pub fn category_name<'a>(categories: &'a [Category], id: &'a str) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == id)
        .map_or(id, |c| c.name.as_str())
}

/// Normalize a search box value: trimmed, empty meaning "no search".
pub fn normalize_search(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Re-run the active filter's backend query into the shared signal.
pub fn refresh(catalog: RwSignal<CatalogState>) {
    let filter = catalog.with_untracked(|c| c.filter.clone());
    catalog.update(|c| c.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let products = match &filter {
            BrowseFilter::All => api::get_products().await,
            BrowseFilter::Category(id) => api::get_products_by_category(id).await,
            BrowseFilter::Search(text) => api::search_products(text).await,
            BrowseFilter::PriceBand { min, max } => {
                api::get_products_filtered_by_price(*min, *max).await
            }
            BrowseFilter::SortedByPrice => api::get_products_sorted_by_price().await,
        };
        catalog.update(|c| {
            c.products = products;
            c.loading = false;
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filter;
        catalog.update(|c| c.loading = false);
    }
}

/// Fetch the category list once into the shared signal.
pub fn refresh_categories(catalog: RwSignal<CatalogState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let categories = api::get_categories().await;
        catalog.update(|c| c.categories = categories);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = catalog;
}
