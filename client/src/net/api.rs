//! REST plumbing shared by every service module.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: requests fail with `ApiError::Unavailable`, since the
//! backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Two failure families are kept apart:
//! - `Err(ApiError)`: the request did not complete (network, non-JSON body).
//! - `Ok(Envelope { success: false, .. })`: the server answered and refused.
//!
//! Callers turn both into user-facing messages through `into_data`/`into_ack`,
//! which never panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::Envelope;
use crate::config::ApiConfig;
use crate::util::token_store::TokenStore;

/// A request that did not produce a usable envelope.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response ({status}): {message}")]
    Decode { status: u16, message: String },
    #[error("not available outside the browser")]
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

/// Endpoint table plus the token store used to authorize requests.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: TokenStore) -> Self {
        Self { config, tokens }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// JSON content type plus the bearer header when a token is stored.
    pub fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        let mut auth: Vec<(String, String)> = self
            .tokens
            .auth_header()
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect();
        headers.append(&mut auth);
        headers
    }

    /// `GET url` and decode the envelope.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the body is not an envelope.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<Envelope<T>, ApiError> {
        self.send::<(), T>(Method::Get, url, None).await
    }

    /// Send a request with an optional JSON body and decode the envelope.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or the body is not an envelope.
    pub async fn send<B, T>(&self, method: Method, url: &str, body: Option<&B>) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let builder = match method {
                Method::Get => Request::get(url),
                Method::Post => Request::post(url),
                Method::Patch => Request::patch(url),
            };
            let builder = self
                .request_headers()
                .iter()
                .fold(builder, |b, (name, value)| b.header(name, value));
            let sent = match body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| ApiError::Transport(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| {
                leptos::logging::warn!("{method:?} {url} failed: {e}");
                ApiError::Transport(e.to_string())
            })?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_envelope(status, &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, url, body.map(serde_json::to_value));
            Err(ApiError::Unavailable)
        }
    }
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a response body into an envelope.
///
/// A non-2xx status with an envelope that still claims success is downgraded
/// to a rejection, so HTTP failures never read as success.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body is not a JSON envelope.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<Envelope<T>, ApiError> {
    let mut envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| ApiError::Decode {
        status,
        message: e.to_string(),
    })?;
    if !is_success_status(status) && envelope.success {
        envelope.success = false;
        envelope.data = None;
        if envelope.message.is_none() {
            envelope.message = Some(format!("request failed: {status}"));
        }
    }
    Ok(envelope)
}

/// Collapse a response into its data or a user-facing message.
///
/// `failure` is shown when the request never completed or the server sent no
/// message of its own.
///
/// # Errors
///
/// Returns the message to display when the request failed, was rejected, or
/// carried no data.
pub fn into_data<T>(result: Result<Envelope<T>, ApiError>, failure: &str) -> Result<T, String> {
    match result {
        Ok(env) if env.success => env.data.ok_or_else(|| failure.to_owned()),
        Ok(env) => Err(env.message_or(failure)),
        Err(e) => {
            leptos::logging::warn!("{failure}: {e}");
            Err(failure.to_owned())
        }
    }
}

/// Like `into_data` for actions whose response carries no meaningful data.
///
/// # Errors
///
/// Returns the message to display when the request failed or was rejected.
pub fn into_ack<T>(result: Result<Envelope<T>, ApiError>, failure: &str) -> Result<(), String> {
    match result {
        Ok(env) if env.success => Ok(()),
        Ok(env) => Err(env.message_or(failure)),
        Err(e) => {
            leptos::logging::warn!("{failure}: {e}");
            Err(failure.to_owned())
        }
    }
}
