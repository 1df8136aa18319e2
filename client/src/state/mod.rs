//! Shared reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the single source of truth for "logged in", `fetch` models a
//! page's request lifecycle, and `toast` queues transient notifications.

pub mod fetch;
pub mod session;
pub mod toast;
