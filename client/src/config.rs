//! Backend endpoint table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin console talks to an external REST API. Its base URL is fixed at
//! build time through `QUIZARENA_API_URL` (Trunk forwards the environment to
//! rustc), falling back to the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `QUIZARENA_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/dashboard/v1";

/// Resolved API location plus every endpoint the console calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl ApiConfig {
    /// Build a config for an explicit base URL. Trailing slashes are dropped.
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Config from the compile-time `QUIZARENA_API_URL` variable.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("QUIZARENA_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // ---- auth ----

    pub fn login(&self) -> String {
        self.url("/users/login")
    }

    pub fn signup(&self) -> String {
        self.url("/users/signup")
    }

    // ---- users ----

    pub fn user_list(&self) -> String {
        self.url("/users/userlist")
    }

    pub fn dashboard_user_list(&self) -> String {
        self.url("/users/dashboarduserlist")
    }

    // ---- contact requests ----

    pub fn contact_list(&self) -> String {
        self.url("/contact")
    }

    pub fn contact_status(&self, contact_id: &str) -> String {
        self.url(&format!("/contact/{contact_id}/status"))
    }

    // ---- admin: quizzes ----

    pub fn pending_quizzes(&self) -> String {
        self.url("/admin/quizzes/pending")
    }

    pub fn all_quizzes(&self) -> String {
        self.url("/admin/quizzes")
    }

    pub fn approve_quiz(&self, quiz_id: &str) -> String {
        self.url(&format!("/admin/quizzes/{quiz_id}/approve"))
    }

    pub fn reject_quiz(&self, quiz_id: &str) -> String {
        self.url(&format!("/admin/quizzes/{quiz_id}/reject"))
    }

    pub fn quiz_details(&self, quiz_id: &str) -> String {
        self.url(&format!("/admin/quizzes/{quiz_id}/review"))
    }

    // ---- admin: analytics ----

    pub fn dashboard_stats(&self) -> String {
        self.url("/admin/stats")
    }

    pub fn user_analytics(&self) -> String {
        self.url("/admin/analytics/users")
    }

    pub fn quiz_analytics(&self) -> String {
        self.url("/admin/analytics/quizzes")
    }

    pub fn revenue_analytics(&self) -> String {
        self.url("/admin/analytics/revenue")
    }

    // ---- admin: transactions ----

    pub fn transactions(&self) -> String {
        self.url("/admin/transactions")
    }

    pub fn approve_withdrawal(&self, transaction_id: &str) -> String {
        self.url(&format!("/admin/transactions/{transaction_id}/approve"))
    }

    pub fn reject_withdrawal(&self, transaction_id: &str) -> String {
        self.url(&format!("/admin/transactions/{transaction_id}/reject"))
    }

    pub fn process_refund(&self) -> String {
        self.url("/admin/transactions/refund")
    }

    // ---- admin: users ----

    pub fn suspend_user(&self, user_id: &str) -> String {
        self.url(&format!("/admin/users/{user_id}/suspend"))
    }

    pub fn unsuspend_user(&self, user_id: &str) -> String {
        self.url(&format!("/admin/users/{user_id}/unsuspend"))
    }

    // ---- admin: system ----

    pub fn system_health(&self) -> String {
        self.url("/admin/system/health")
    }

    pub fn activity_logs(&self) -> String {
        self.url("/admin/system/logs")
    }
}

/// Append an encoded query string to `url`, skipping empty values.
///
/// Returns `url` untouched when no pair survives.
pub fn with_query(url: &str, pairs: &[(&str, &str)]) -> String {
    let kept: Vec<(&str, &str)> = pairs.iter().copied().filter(|(_, v)| !v.is_empty()).collect();
    if kept.is_empty() {
        return url.to_owned();
    }
    match serde_urlencoded::to_string(&kept) {
        Ok(query) => format!("{url}?{query}"),
        Err(_) => url.to_owned(),
    }
}
