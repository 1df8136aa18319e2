//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch lifecycle, filters,
//! actions) and delegates shared rendering to `components`.

pub mod ai_quiz;
pub mod contact_list;
pub mod dashboard_user_list;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod quiz_management;
pub mod signup;
pub mod stats;
pub mod transactions;
pub mod user_list;
