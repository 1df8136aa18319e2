//! Login and signup requests, and turning their responses into a session.
//!
//! The request functions never touch storage; `complete_auth` is the single
//! place a returned token is persisted, through `SessionStore::sign_in`, so
//! the header and guards hear about it in the same tab.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Serialize;

use super::api::{ApiClient, ApiError, Method};
use super::types::{AuthPayload, Envelope};
use crate::state::session::SessionStore;

/// Shown when the token could not be written to storage.
pub const STORAGE_FAILURE_MESSAGE: &str = "Could not save your session. Check browser storage settings.";

/// Shown when the server accepted the credentials but sent no token.
pub const MISSING_TOKEN_MESSAGE: &str = "Login response did not include a token";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupFields {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_code: Option<String>,
}

/// `POST /users/login`.
///
/// # Errors
///
/// Returns an `ApiError` when the request does not complete. A rejection by
/// the server is `Ok` with `success: false`.
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<Envelope<AuthPayload>, ApiError> {
    api.send(Method::Post, &api.config().login(), Some(credentials)).await
}

/// `POST /users/signup`.
///
/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn signup(api: &ApiClient, fields: &SignupFields) -> Result<Envelope<AuthPayload>, ApiError> {
    api.send(Method::Post, &api.config().signup(), Some(fields)).await
}

/// Which form produced the response; selects the fallback messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthFlow {
    Login,
    Signup,
}

impl AuthFlow {
    fn rejected_message(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Signup => "Signup failed",
        }
    }

    fn failed_message(self) -> &'static str {
        match self {
            Self::Login => "An error occurred during login",
            Self::Signup => "An error occurred during signup",
        }
    }
}

/// Result of a login/signup attempt as the form should present it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Token persisted; the session is live.
    SignedIn,
    /// The server answered and refused.
    Rejected(String),
    /// The request or the token write did not complete.
    Failed(String),
}

/// Persist the token from a successful response and classify the outcome.
pub fn complete_auth(
    session: &SessionStore,
    result: Result<Envelope<AuthPayload>, ApiError>,
    flow: AuthFlow,
) -> AuthOutcome {
    let envelope = match result {
        Ok(envelope) => envelope,
        Err(e) => {
            leptos::logging::error!("{flow:?} request failed: {e}");
            return AuthOutcome::Failed(flow.failed_message().to_owned());
        }
    };
    if !envelope.success {
        return AuthOutcome::Rejected(envelope.message_or(flow.rejected_message()));
    }
    let token = envelope
        .data
        .and_then(|payload| payload.token)
        .filter(|token| !token.is_empty());
    let Some(token) = token else {
        return AuthOutcome::Rejected(MISSING_TOKEN_MESSAGE.to_owned());
    };
    if session.sign_in(&token) {
        AuthOutcome::SignedIn
    } else {
        AuthOutcome::Failed(STORAGE_FAILURE_MESSAGE.to_owned())
    }
}
