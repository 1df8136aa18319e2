//! Loading, error, and empty-state panels shared by every page.

use leptos::prelude::*;

#[component]
pub fn LoadingPanel(#[prop(default = "Loading...")] message: &'static str) -> impl IntoView {
    view! {
        <div class="panel panel--loading">
            <span class="panel__spinner" aria-hidden="true"></span>
            <p>{message}</p>
        </div>
    }
}

/// Inline failure with a manual retry.
#[component]
pub fn ErrorPanel(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="panel panel--error" role="alert">
            <p class="panel__message">{message}</p>
            <button class="btn panel__retry" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}

#[component]
pub fn EmptyPanel(message: &'static str) -> impl IntoView {
    view! {
        <div class="panel panel--empty">
            <p>{message}</p>
        </div>
    }
}
