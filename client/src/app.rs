//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! Every shared handle is built exactly once here and placed in context:
//! the session hub, the document-store handle, and the chrome-facing auth
//! state. Pages and the route guard only ever pull these from context, so
//! tests can provide doubles and no module constructs its own connection.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::pages::dashboard::{DashboardPage, WelcomePanel};
use crate::pages::fees::FeesPage;
use crate::pages::login::LoginPage;
use crate::pages::signup::SignupPage;
use crate::pages::student_form::StudentFormPage;
use crate::pages::students::StudentsPage;
use crate::state::auth::AuthState;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "csr")]
    {
        let hub = crate::net::session::SessionHub::new();
        let store = crate::net::store::StoreHandle::new(crate::net::store::StoreConfig::default());
        provide_context(hub.clone());
        provide_context(store);

        // Mirror session events into the chrome-facing auth state.
        let mirror = hub.subscribe(std::rc::Rc::new(move |user| {
            auth.set(AuthState::resolved(user));
        }));
        on_cleanup(move || drop(mirror));

        // Startup probe: ask the provider who is signed in and publish the
        // answer as the first session event.
        let hub_probe = hub.clone();
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            hub_probe.publish(user);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/school-console.css"/>
        <Title text="School Console"/>

        <Router>
            // Unknown paths land on the dashboard; the gate decides from there.
            <Routes fallback=|| view! { <Redirect path="/dashboard"/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <ParentRoute path=StaticSegment("dashboard") view=GuardedShell>
                    <Route path=StaticSegment("") view=WelcomePanel/>
                    <Route path=StaticSegment("students") view=StudentsPage/>
                    <Route
                        path=(StaticSegment("students"), StaticSegment("new"))
                        view=StudentFormPage
                    />
                    <Route path=StaticSegment("fees") view=FeesPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Dashboard subtree behind the session gate: nothing inside renders until
/// the session settles signed-in.
#[component]
fn GuardedShell() -> impl IntoView {
    view! {
        <Protected>
            <DashboardPage/>
        </Protected>
    }
}
