//! Request lifecycle for page-level data.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page holds its resource in a `RwSignal<FetchState<T>>` plus a
//! `RequestGate`. A load sets `Loading`, takes a ticket, spawns the request,
//! and hands the outcome to `settle`, which writes it only while the ticket is
//! still the newest one on a mounted page and raises an error toast on
//! failure. Completions after navigation or after a newer load are dropped.
//!
//! Requests only run in the browser build; natively `spawn_fetch` leaves the
//! state at `Loading` and drops the future unpolled.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;

use leptos::prelude::*;

use super::toast::{ToastState, notify_error};
use crate::util::mounted::{RequestGate, RequestTicket};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(message) => Self::Failed(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Mutate the loaded value in place; no-op unless `Ready`.
    pub fn update_ready(&mut self, apply: impl FnOnce(&mut T)) -> bool {
        match self {
            Self::Ready(value) => {
                apply(value);
                true
            }
            _ => false,
        }
    }
}

/// Replace `state` with the outcome. Returns the failure message, if any.
pub fn apply_result<T>(state: &mut FetchState<T>, result: Result<T, String>) -> Option<String> {
    let failure = result.as_ref().err().cloned();
    *state = FetchState::from_result(result);
    failure
}

/// Store a finished request into `state` while `ticket` is current.
///
/// Failures also raise an error toast with the same message; superseded
/// failures are dropped silently.
pub fn settle<T>(
    state: RwSignal<FetchState<T>>,
    ticket: &RequestTicket,
    toasts: RwSignal<ToastState>,
    result: Result<T, String>,
) where
    T: Send + Sync + 'static,
{
    ticket.run_if_current(move || {
        let failure = state.try_update(|s| apply_result(s, result)).flatten();
        if let Some(message) = failure {
            notify_error(toasts, message);
        }
    });
}

/// Reset `state` to `Loading` and run `request` in the background, storing
/// its outcome through `settle`. Any earlier request on `gate` is superseded.
pub fn spawn_fetch<T, Fut>(state: RwSignal<FetchState<T>>, gate: &RequestGate, toasts: RwSignal<ToastState>, request: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let ticket = gate.begin();
    state.set(FetchState::Loading);
    spawn_task(async move {
        let result = request.await;
        settle(state, &ticket, toasts, result);
    });
}

/// Run a fire-and-forget task (mutations, form submits) in the browser.
pub fn spawn_task<Fut>(task: Fut)
where
    Fut: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);

    #[cfg(not(feature = "csr"))]
    drop(task);
}
