//! Static page footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="site-footer__brand">"QuizArena Admin"</span>
            <nav class="site-footer__nav">
                <A href="/stats">"Stats"</A>
                <A href="/contacts">"Contacts"</A>
            </nav>
        </footer>
    }
}
