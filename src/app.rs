//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_shell::AppShell;
use crate::pages::{
    account_login::AccountLoginPage, admin_activate::AdminActivatePage,
    admin_customers::AdminCustomersPage, admin_dashboard::AdminDashboardPage,
    admin_orders::AdminOrdersPage, admin_products::AdminProductsPage, cart::CartPage,
    catalog::CatalogPage, checkout::CheckoutPage, home::HomePage, order_detail::OrderDetailPage,
    orders::OrdersPage, product_detail::ProductDetailPage, profile::ProfilePage,
    wishlist::WishlistPage,
};
use crate::state::cart::CartState;
use crate::state::catalog::CatalogState;
use crate::state::orders::OrdersState;
use crate::state::profile::ProfileState;
use crate::state::session::{self, AdminQuery, RoleQuery};
use crate::state::wishlist::WishlistState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing. The
/// session flags are loaded from sessionStorage once here; every later
/// mutation goes through `state::session` so signal and storage stay in
/// step.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let flags = RwSignal::new(session::load_flags());
    let role_query = RwSignal::new(RoleQuery::default());
    let admin_query = RwSignal::new(AdminQuery::default());
    let cart = RwSignal::new(CartState::default());
    let catalog = RwSignal::new(CatalogState::default());
    let orders = RwSignal::new(OrdersState::default());
    let wishlist = RwSignal::new(WishlistState::default());
    let profile = RwSignal::new(ProfileState::default());

    provide_context(flags);
    provide_context(role_query);
    provide_context(admin_query);
    provide_context(cart);
    provide_context(catalog);
    provide_context(orders);
    provide_context(wishlist);
    provide_context(profile);

    // One role query per mount drives every guard's derived session.
    session::refresh_role(role_query);
    crate::state::cart::refresh(cart);

    view! {
        <Stylesheet id="leptos" href="/pkg/aurum.css"/>
        <Title text="Aurum"/>

        <Router>
            <AppShell>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("catalog") view=CatalogPage/>
                    <Route
                        path=(StaticSegment("product"), ParamSegment("id"))
                        view=ProductDetailPage
                    />
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("checkout") view=CheckoutPage/>
                    <Route path=StaticSegment("orders") view=OrdersPage/>
                    <Route
                        path=(StaticSegment("orders"), ParamSegment("id"))
                        view=OrderDetailPage
                    />
                    <Route path=StaticSegment("wishlist") view=WishlistPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route
                        path=(StaticSegment("account"), StaticSegment("login"))
                        view=AccountLoginPage
                    />
                    <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("products"))
                        view=AdminProductsPage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("orders"))
                        view=AdminOrdersPage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("customers"))
                        view=AdminCustomersPage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("activate"))
                        view=AdminActivatePage
                    />
                </Routes>
            </AppShell>
        </Router>
    }
}
