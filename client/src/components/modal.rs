//! Shared modal dialog chrome.

use leptos::prelude::*;

/// Backdrop-plus-dialog wrapper. Clicking the backdrop or pressing Escape
/// runs `on_close`; clicks inside the dialog stay inside.
#[component]
pub fn Modal(
    /// Dialog heading.
    title: &'static str,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_close.run(());
                    }
                }
                tabindex="0"
            >
                <h2>{title}</h2>
                {children()}
            </div>
        </div>
    }
}
