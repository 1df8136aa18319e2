//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and pure list/form logic from
//! page rendering so they can be tested natively.

pub mod filter;
pub mod format;
pub mod mounted;
pub mod token_store;
pub mod validate;
