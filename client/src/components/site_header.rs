//! Session-aware site header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders login/signup links when logged out and the admin navigation when
//! logged in. The shown state comes from the `RwSignal<SessionStatus>` mirror,
//! which is re-read from storage on mount and whenever another tab touches
//! the token (window `storage` event). Same-tab changes arrive through the
//! session store's subscription, so no polling is needed.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::guard::LOGIN_PATH;
use crate::state::session::{SessionStatus, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const LOGGED_OUT_LINKS: &[NavLink] = &[
    NavLink { href: "/login", label: "Login" },
    NavLink { href: "/signup", label: "Sign up" },
];

const LOGGED_IN_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Dashboard" },
    NavLink { href: "/stats", label: "Stats" },
    NavLink { href: "/quizzes", label: "Quizzes" },
    NavLink { href: "/userlist", label: "Users" },
    NavLink { href: "/contacts", label: "Contacts" },
    NavLink { href: "/transactions", label: "Transactions" },
    NavLink { href: "/ai-quiz", label: "AI Quiz" },
    NavLink { href: "/profile", label: "Profile" },
];

/// Navigation affordances for `status`. Logout is rendered separately.
pub fn nav_links(status: SessionStatus) -> &'static [NavLink] {
    match status {
        SessionStatus::LoggedOut => LOGGED_OUT_LINKS,
        SessionStatus::LoggedIn => LOGGED_IN_LINKS,
    }
}

/// Clear the session and return where the document should navigate.
pub fn logout(session: &SessionStore) -> &'static str {
    if !session.sign_out() {
        leptos::logging::warn!("logout could not clear stored token");
    }
    LOGIN_PATH
}

/// Full document navigation, discarding all in-memory state.
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = path;
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let status = expect_context::<RwSignal<SessionStatus>>();

    status.set(session.status());

    #[cfg(feature = "csr")]
    {
        let session = session.clone();
        let handle = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
            let key = ev.key();
            if let Some(next) = session.handle_storage_event(key.as_deref()) {
                leptos::logging::log!("session changed in another tab: {next:?}");
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_logout = move |_| {
        let target = logout(&session);
        status.set(SessionStatus::LoggedOut);
        hard_navigate(target);
    };

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">
                "QuizArena Admin"
            </A>
            <nav class="site-header__nav">
                {move || {
                    nav_links(status.get())
                        .iter()
                        .map(|link| {
                            view! {
                                <A href=link.href attr:class="site-header__link">
                                    {link.label}
                                </A>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || status.get().is_logged_in()>
                    <button class="btn site-header__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
