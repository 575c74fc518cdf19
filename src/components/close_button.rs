//! Close Button Component
//!
//! Reusable × button that dismisses a panel.

use leptos::prelude::*;

/// Close button
///
/// # Arguments
/// * `button_class` - CSS class for the button
/// * `on_close` - Callback to run once per click
#[component]
pub fn CloseButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=button_class
            title="Close"
            aria-label="Close"
            on:click=move |ev| {
                ev.stop_propagation();
                on_close.run(());
            }
        >
            "×"
        </button>
    }
}
