//! Admin customer management: role assignment by user id.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::components::admin_guard::AdminGuard;
use crate::net::types::UserRole;

#[component]
pub fn AdminCustomersPage() -> impl IntoView {
    let user_id = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::User);
    let notice = RwSignal::new(String::new());

    let on_assign = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let target = user_id.get().trim().to_owned();
        if target.is_empty() {
            notice.set("User id is required".to_owned());
            return;
        }
        let assigned = role.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::assign_user_role(&target, assigned).await {
                Ok(()) => notice.set(format!("Role updated for {target}")),
                Err(e) => notice.set(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (target, assigned);
    };

    view! {
        <AdminGuard>
            <div class="admin-customers">
                <h1>"Customers"</h1>
                <form class="admin-customers__form" on:submit=on_assign>
                    <input
                        placeholder="User id"
                        prop:value=move || user_id.get()
                        on:input=move |ev| user_id.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| {
                        role.set(match event_target_value(&ev).as_str() {
                            "admin" => UserRole::Admin,
                            "guest" => UserRole::Guest,
                            _ => UserRole::User,
                        });
                    }>
                        <option value="user" selected=true>
                            "User"
                        </option>
                        <option value="admin">"Admin"</option>
                        <option value="guest">"Guest"</option>
                    </select>
                    <button class="button button--primary" type="submit">
                        "Assign Role"
                    </button>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="admin-customers__notice">{move || notice.get()}</p>
                </Show>
            </div>
        </AdminGuard>
    }
}
