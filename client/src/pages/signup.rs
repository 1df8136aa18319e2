//! Admin registration with client-side validation and a strength meter.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::guard::HOME_PATH;
use crate::net::api::ApiClient;
use crate::net::auth::{AuthFlow, AuthOutcome, SignupFields, complete_auth, signup};
use crate::state::fetch::spawn_task;
use crate::state::session::SessionStore;
use crate::util::mounted::MountFlag;
use crate::util::validate::{password_strength, validate_signup};

/// Validate the form and build the request body. A blank secret code is omitted.
///
/// # Errors
///
/// Returns the inline message for the first invalid field.
pub fn build_signup(name: &str, email: &str, password: &str, secret_code: &str) -> Result<SignupFields, String> {
    validate_signup(name, email, password)?;
    let secret_code = secret_code.trim();
    Ok(SignupFields {
        name: name.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
        secret_code: (!secret_code.is_empty()).then(|| secret_code.to_owned()),
    })
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let mounted = MountFlag::on_current_owner();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let secret_code = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let strength = Memo::new(move |_| password_strength(&password.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let fields = match build_signup(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &secret_code.get_untracked(),
        ) {
            Ok(fields) => fields,
            Err(message) => {
                error.set(Some(message));
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
            let result = signup(&api, &fields).await;
            let outcome = complete_auth(&session, result, AuthFlow::Signup);
            mounted.run_if_live(|| {
                busy.set(false);
                match outcome {
                    AuthOutcome::SignedIn => {
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
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || !password.get().is_empty()>
                        <div class=move || format!("strength {}", strength.get().css_modifier())>
                            <span
                                class="strength__bar"
                                style=move || format!("width: {}%", strength.get().segments() * 25)
                            ></span>
                            <span class="strength__label">{move || strength.get().label()}</span>
                        </div>
                    </Show>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Secret code (optional)"
                        prop:value=move || secret_code.get()
                        on:input=move |ev| secret_code.set(event_target_value(&ev))
                    />
                    <button class="btn auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                {move || error.get().map(|message| view! { <p class="auth-message auth-message--error">{message}</p> })}
                <p class="auth-card__switch">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
