//! Dashboard shell: sidebar navigation around the nested admin routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The router wraps every nested
//! route in the session gate, so by the time content renders here a settled
//! signed-in session exists. Signing out publishes a signed-out session;
//! the gate then performs the redirect to `/login`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::state::auth::AuthState;

/// Sidebar entries, in display order. Paths are relative to `/dashboard`.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "/dashboard"),
    ("Students", "/dashboard/students"),
    ("New Admission", "/dashboard/students/new"),
    ("Fees", "/dashboard/fees"),
];

/// Label shown next to the logout button for the signed-in account.
fn account_label(state: &AuthState) -> String {
    state.display_label()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "csr")]
    let hub = expect_context::<crate::net::session::SessionHub>();

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            let hub = hub.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out().await;
                hub.publish(None);
            });
        }
    };

    view! {
        <div class="dashboard-page">
            <aside class="dashboard-sidebar">
                <h2 class="dashboard-sidebar__title">"School Console"</h2>
                <nav class="dashboard-sidebar__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <A href=*href>
                                    <span class="dashboard-sidebar__item">{*label}</span>
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="dashboard-sidebar__footer">
                    <span class="dashboard-sidebar__account">
                        {move || account_label(&auth.get())}
                    </span>
                    <button class="btn dashboard-sidebar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </aside>
            <main class="dashboard-content">
                <Outlet/>
            </main>
        </div>
    }
}

/// Landing panel for the bare `/dashboard` route.
#[component]
pub fn WelcomePanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="welcome-panel">
            <h1>"Welcome"</h1>
            <p>{move || format!("Signed in as {}", account_label(&auth.get()))}</p>
            <p class="welcome-panel__hint">
                "Use the sidebar to manage students, admissions and fees."
            </p>
        </div>
    }
}
