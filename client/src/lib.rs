//! # client
//!
//! Leptos + WASM admin console for the QuizArena platform.
//!
//! This crate contains pages, components, session state, REST helpers, and
//! the route guards that gate pages on the presence of a stored session token.
//! Browser-only code is gated behind the `csr` feature; the native build keeps
//! pure logic testable without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
