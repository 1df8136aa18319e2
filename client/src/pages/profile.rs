//! Signed-in admin's session details.

use leptos::prelude::*;

use crate::components::site_header::{hard_navigate, logout};
use crate::state::session::{SessionStatus, SessionStore};
use crate::util::format::mask_token;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let status = expect_context::<RwSignal<SessionStatus>>();

    let masked = {
        let session = session.clone();
        move || {
            status.track();
            session.tokens().get().map_or_else(|| "-".to_owned(), |t| mask_token(&t))
        }
    };

    let on_logout = move |_| {
        let target = logout(&session);
        status.set(SessionStatus::LoggedOut);
        hard_navigate(target);
    };

    view! {
        <section class="page profile-page">
            <h1 class="page__title">"Profile"</h1>
            <dl class="profile-details">
                <dt>"Session"</dt>
                <dd>{move || if status.get().is_logged_in() { "Signed in" } else { "Signed out" }}</dd>
                <dt>"Token"</dt>
                <dd class="mono">{masked}</dd>
            </dl>
            <button class="btn btn--danger" on:click=on_logout>
                "Logout"
            </button>
        </section>
    }
}
