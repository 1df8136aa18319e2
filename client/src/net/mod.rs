//! Networking modules for the QuizArena REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request plumbing and the envelope/error split, `auth` the
//! login/signup flow, and `users`, `contacts`, `admin` one endpoint family
//! each. `types` defines the shared wire schema.

pub mod admin;
pub mod api;
pub mod auth;
pub mod contacts;
pub mod types;
pub mod users;
