//! Signup page: creates a credential account, then writes the staff
//! profile document keyed by the new account's uid.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;

/// Validated signup form fields, trimmed and ready to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub nic: String,
}

fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    phone: &str,
    nic: &str,
) -> Result<SignupForm, &'static str> {
    let name = name.trim();
    let email = email.trim();
    let password = password.trim();
    let phone = phone.trim();
    let nic = nic.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Name, email and password are required.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok(SignupForm {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        phone: phone.to_owned(),
        nic: nic.to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let nic = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let hub = expect_context::<crate::net::session::SessionHub>();
    #[cfg(feature = "csr")]
    let store = expect_context::<crate::net::store::StoreHandle>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_signup(
            &name.get(),
            &email.get(),
            &password.get(),
            &phone.get(),
            &nic.get(),
        ) {
            Ok(form) => form,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let hub = hub.clone();
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&form.email, &form.password).await {
                    Ok(user) => {
                        let profile = crate::net::types::ProfileDraft {
                            name: form.name.clone(),
                            phone_number: form.phone.clone(),
                            nic_number: form.nic.clone(),
                        };
                        let body = serde_json::to_value(&profile).unwrap_or_default();
                        if let Err(err) = store.put("users", &user.uid, &body).await {
                            log::warn!("profile write failed for {}: {err}", user.uid);
                        }
                        hub.publish(Some(user));
                        navigate(
                            "/dashboard",
                            leptos_router::NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(message) => {
                        error.set(Some(message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = form;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"School Console"</h1>
                <p class="login-card__subtitle">"Staff Registration"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@school.pk"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password (6+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="Phone number"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="NIC number"
                        prop:value=move || nic.get()
                        on:input=move |ev| nic.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <div class="login-divider"></div>
                <A href="/login">"Back to sign in"</A>
            </div>
        </div>
    }
}
