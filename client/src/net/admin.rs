//! Admin endpoints: quiz moderation, analytics, transactions, user
//! moderation, and system monitoring.
//!
//! All of these require the bearer header; `ApiClient` attaches it whenever a
//! token is stored.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::Serialize;
use serde_json::Value;

use super::api::{ApiClient, ApiError, Method};
use super::types::{
    ActivityLogList, DashboardStats, Envelope, QuizList, QuizReview, RefundRequest, TransactionList,
};
use crate::config::{ApiConfig, with_query};

#[derive(Debug, Serialize)]
struct Feedback<'a> {
    feedback: &'a str,
}

#[derive(Debug, Serialize)]
struct Reason<'a> {
    reason: &'a str,
}

// =============================================================================
// QUIZZES
// =============================================================================

/// Status tab on the quiz moderation page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizFilter {
    #[default]
    Pending,
    Approved,
    Rejected,
    All,
}

impl QuizFilter {
    pub const TABS: [Self; 4] = [Self::Pending, Self::Approved, Self::Rejected, Self::All];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::All => "All",
        }
    }

    /// Pending has its own endpoint; the rest filter the full list.
    pub fn list_url(self, config: &ApiConfig) -> String {
        match self {
            Self::Pending => config.pending_quizzes(),
            Self::Approved => with_query(&config.all_quizzes(), &[("status", "approved")]),
            Self::Rejected => with_query(&config.all_quizzes(), &[("status", "rejected")]),
            Self::All => config.all_quizzes(),
        }
    }
}

/// URL listing AI-generated quizzes.
pub fn ai_quizzes_url(config: &ApiConfig) -> String {
    with_query(&config.all_quizzes(), &[("source", "ai")])
}

/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn fetch_quizzes(api: &ApiClient, filter: QuizFilter) -> Result<Envelope<QuizList>, ApiError> {
    api.get(&filter.list_url(api.config())).await
}

/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn fetch_ai_quizzes(api: &ApiClient) -> Result<Envelope<QuizList>, ApiError> {
    api.get(&ai_quizzes_url(api.config())).await
}

/// `GET /admin/quizzes/:id/review`.
///
/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn fetch_quiz_review(api: &ApiClient, quiz_id: &str) -> Result<Envelope<QuizReview>, ApiError> {
    api.get(&api.config().quiz_details(quiz_id)).await
}

/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn approve_quiz(api: &ApiClient, quiz_id: &str, feedback: &str) -> Result<Envelope<Value>, ApiError> {
    let body = Feedback { feedback };
    api.send(Method::Post, &api.config().approve_quiz(quiz_id), Some(&body))
        .await
}

/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn reject_quiz(api: &ApiClient, quiz_id: &str, reason: &str) -> Result<Envelope<Value>, ApiError> {
    let body = Reason { reason };
    api.send(Method::Post, &api.config().reject_quiz(quiz_id), Some(&body))
        .await
}

// =============================================================================
// ANALYTICS
// =============================================================================

/// Reporting window for the analytics endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    Week,
    #[default]
    Month,
    Quarter,
}

impl Period {
    pub const ALL: [Self; 3] = [Self::Week, Self::Month, Self::Quarter];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::Quarter => "Last 90 days",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

/// Which analytics series to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Analytics {
    Users,
    Quizzes,
    Revenue,
}

impl Analytics {
    pub const ALL: [Self; 3] = [Self::Users, Self::Quizzes, Self::Revenue];

    pub fn title(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Quizzes => "Quizzes",
            Self::Revenue => "Revenue",
        }
    }

    pub fn url(self, config: &ApiConfig, period: Period) -> String {
        let base = match self {
            Self::Users => config.user_analytics(),
            Self::Quizzes => config.quiz_analytics(),
            Self::Revenue => config.revenue_analytics(),
        };
        with_query(&base, &[("period", period.as_str())])
    }
}

/// `GET /admin/stats`.
///
/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn fetch_dashboard_stats(api: &ApiClient) -> Result<Envelope<DashboardStats>, ApiError> {
    api.get(&api.config().dashboard_stats()).await
}

/// Analytics payloads vary by series and are rendered as summary rows.
///
/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn fetch_analytics(api: &ApiClient, series: Analytics, period: Period) -> Result<Envelope<Value>, ApiError> {
    api.get(&series.url(api.config(), period)).await
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// `GET /admin/transactions`, optionally filtered by status.
///
/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn fetch_transactions(api: &ApiClient, status: &str) -> Result<Envelope<TransactionList>, ApiError> {
    let url = with_query(&api.config().transactions(), &[("status", status)]);
    api.get(&url).await
}

/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn approve_withdrawal(api: &ApiClient, transaction_id: &str) -> Result<Envelope<Value>, ApiError> {
    api.send::<(), Value>(Method::Post, &api.config().approve_withdrawal(transaction_id), None)
        .await
}

/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn reject_withdrawal(api: &ApiClient, transaction_id: &str, reason: &str) -> Result<Envelope<Value>, ApiError> {
    let body = Reason { reason };
    api.send(Method::Post, &api.config().reject_withdrawal(transaction_id), Some(&body))
        .await
}

/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn process_refund(api: &ApiClient, refund: &RefundRequest) -> Result<Envelope<Value>, ApiError> {
    api.send(Method::Post, &api.config().process_refund(), Some(refund))
        .await
}

// =============================================================================
// USER MODERATION
// =============================================================================

/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn suspend_user(api: &ApiClient, user_id: &str, reason: &str) -> Result<Envelope<Value>, ApiError> {
    let body = Reason { reason };
    api.send(Method::Post, &api.config().suspend_user(user_id), Some(&body))
        .await
}

/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn unsuspend_user(api: &ApiClient, user_id: &str) -> Result<Envelope<Value>, ApiError> {
    api.send::<(), Value>(Method::Post, &api.config().unsuspend_user(user_id), None)
        .await
}

// =============================================================================
// SYSTEM
// =============================================================================

/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn fetch_system_health(api: &ApiClient) -> Result<Envelope<Value>, ApiError> {
    api.get(&api.config().system_health()).await
}

/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn fetch_activity_logs(api: &ApiClient, limit: u32) -> Result<Envelope<ActivityLogList>, ApiError> {
    let limit = limit.to_string();
    let url = with_query(&api.config().activity_logs(), &[("limit", limit.as_str())]);
    api.get(&url).await
}
