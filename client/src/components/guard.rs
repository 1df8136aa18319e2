//! Route guards gating pages on session-token presence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both guards share one predicate, `RouteGuard::can_render`, and differ only
//! in where they send a rejected visitor. Decisions are recomputed on every
//! location change and every session change; nothing is cached. Redirects
//! replace the history entry so Back never lands on the guard again.
//!
//! `ProtectedRoute` wraps the authenticated pages as a parent route and
//! renders the matched child through `<Outlet/>`. `PublicRoute` wraps the
//! login and signup forms.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::with_query;
use crate::state::session::{SessionStatus, SessionStore};

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const HOME_PATH: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGuard {
    /// Requires a session; otherwise sends the visitor to login.
    Protected,
    /// Only for visitors without a session; otherwise sends them home.
    Public,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect { to: String },
}

impl RouteGuard {
    pub fn can_render(self, logged_in: bool) -> bool {
        match self {
            Self::Protected => logged_in,
            Self::Public => !logged_in,
        }
    }

    /// `location` is the path plus query being visited.
    pub fn decide(self, logged_in: bool, location: &str) -> GuardDecision {
        if self.can_render(logged_in) {
            return GuardDecision::Render;
        }
        let to = match self {
            Self::Protected => login_redirect(location),
            Self::Public => HOME_PATH.to_owned(),
        };
        GuardDecision::Redirect { to }
    }
}

/// `/login?from=<location>`, or bare `/login` when `location` is not a safe
/// return target.
pub fn login_redirect(location: &str) -> String {
    match safe_return_path(Some(location)) {
        Some(from) if from != HOME_PATH => with_query(LOGIN_PATH, &[("from", from.as_str())]),
        _ => LOGIN_PATH.to_owned(),
    }
}

/// Accept only same-origin absolute paths that are not auth pages.
pub fn safe_return_path(from: Option<&str>) -> Option<String> {
    let from = from?.trim();
    if !from.starts_with('/') || from.starts_with("//") || from.contains('\\') {
        return None;
    }
    let path = from.split(['?', '#']).next().unwrap_or(from);
    if path == LOGIN_PATH || path == SIGNUP_PATH {
        return None;
    }
    Some(from.to_owned())
}

/// Join a pathname and raw query string as the router reports them.
pub fn current_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Evaluate `guard` reactively and redirect (replacing history) when it
/// refuses. Returns whether the wrapped view may render.
fn use_guard(guard: RouteGuard) -> Memo<bool> {
    let session = expect_context::<SessionStore>();
    let status = expect_context::<RwSignal<SessionStatus>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        // The mirror only drives re-evaluation; truth is read from storage.
        status.track();
        let here = current_location(&location.pathname.get(), &location.search.get());
        guard.decide(session.is_logged_in(), &here)
    });

    Effect::new(move || {
        if let GuardDecision::Redirect { to } = decision.get() {
            leptos::logging::log!("{guard:?} guard redirecting to {to}");
            navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    Memo::new(move |_| decision.get() == GuardDecision::Render)
}

/// Parent route for pages that need a session.
#[component]
pub fn ProtectedRoute() -> impl IntoView {
    let allowed = use_guard(RouteGuard::Protected);
    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <p class="guard-pending">"Redirecting to login..."</p> }
        >
            <Outlet/>
        </Show>
    }
}

/// Wrapper for pages only meaningful without a session.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let allowed = use_guard(RouteGuard::Public);
    view! {
        <Show when=move || allowed.get()>
            {children()}
        </Show>
    }
}
