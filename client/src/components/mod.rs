//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome (header, footer, toasts), the route
//! guards, and shared panels, reading session and toast state from Leptos
//! context providers.

pub mod guard;
pub mod panel;
pub mod site_footer;
pub mod site_header;
pub mod stats_card;
pub mod toaster;
