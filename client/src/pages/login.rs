//! Email + password sign-in.
//!
//! A successful response's token is persisted through the session store,
//! which flips the header and guards in this tab; the page then replaces the
//! history entry with `/`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::guard::{HOME_PATH, safe_return_path};
use crate::net::api::ApiClient;
use crate::net::auth::{AuthFlow, AuthOutcome, Credentials, complete_auth, login};
use crate::state::fetch::spawn_task;
use crate::state::session::SessionStore;
use crate::util::mounted::MountFlag;

/// Trim inputs and require both.
///
/// # Errors
///
/// Returns the inline message to show when a field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Banner shown when the visitor was bounced here from a protected page.
pub fn continue_message(from: Option<&str>) -> Option<String> {
    safe_return_path(from).map(|path| format!("Sign in to continue to {path}"))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let query = use_query_map();
    let navigate = use_navigate();
    let mounted = MountFlag::on_current_owner();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let banner = move || query.with(|q| continue_message(q.get("from").as_deref()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        let mounted = mounted.clone();
        spawn_task(async move {
            let result = login(&api, &credentials).await;
            let outcome = complete_auth(&session, result, AuthFlow::Login);
            mounted.run_if_live(|| {
                busy.set(false);
                match outcome {
                    AuthOutcome::SignedIn => {
                        leptos::logging::log!("signed in");
                        navigate(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    AuthOutcome::Rejected(message) | AuthOutcome::Failed(message) => error.set(Some(message)),
                }
            });
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"QuizArena Admin"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                {move || banner().map(|text| view! { <p class="auth-card__notice">{text}</p> })}
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="auth-input-row">
                        <input
                            class="auth-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="btn btn--ghost"
                            type="button"
                            on:click=move |_| show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="btn auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                {move || error.get().map(|message| view! { <p class="auth-message auth-message--error">{message}</p> })}
                <p class="auth-card__switch">
                    "No account? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
