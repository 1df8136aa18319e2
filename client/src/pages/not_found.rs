//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let on_back = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                let _ = history.back();
            }
        }
    };

    view! {
        <section class="page not-found-page">
            <h1 class="not-found-page__code">"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <div class="not-found-page__actions">
                <A href="/">"Go home"</A>
                <button class="btn" on:click=on_back>
                    "Back"
                </button>
            </div>
        </section>
    }
}
