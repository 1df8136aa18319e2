//! Wire DTOs for the QuizArena REST API.
//!
//! DESIGN
//! ======
//! Every endpoint answers with the same `{success, message?, data?}` envelope.
//! Record types mirror the backend's JSON (Mongo-style `_id`, camelCase fields)
//! and default generously, since the admin console only displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response shape shared by every backend endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// The server's message, or `fallback` when it sent none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_owned()
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// `data` of a login or signup response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

// =============================================================================
// USERS
// =============================================================================

/// A platform user as listed by `/users/userlist` and `/users/dashboarduserlist`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub role: Option<String>,
    pub balance: Option<f64>,
    pub suspended: bool,
}

impl UserRecord {
    pub fn role_label(&self) -> &str {
        self.role.as_deref().filter(|r| !r.is_empty()).unwrap_or("User")
    }

    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }
}

// =============================================================================
// CONTACT REQUESTS
// =============================================================================

/// Triage status of a contact request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
    #[serde(other)]
    Unknown,
}

impl ContactStatus {
    /// Statuses an admin can assign.
    pub const ASSIGNABLE: [Self; 3] = [Self::Pending, Self::InProgress, Self::Resolved];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Unknown => "Unknown",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ASSIGNABLE.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

// =============================================================================
// QUIZZES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Draft,
    #[serde(other)]
    Unknown,
}

impl QuizStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Draft => "draft",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizCreator {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AntiCheat {
    pub detect_tab_switch: bool,
    pub detect_copy_paste: bool,
    pub force_fullscreen: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizSettings {
    pub anti_cheat: AntiCheat,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Quiz {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub is_paid: bool,
    pub price: Option<f64>,
    pub time_limit: Option<u32>,
    pub attempt_count: u64,
    pub status: QuizStatus,
    pub created_at: Option<String>,
    pub creator: Option<QuizCreator>,
    pub questions: Vec<Question>,
    pub settings: Option<QuizSettings>,
    pub rejection_reason: Option<String>,
}

impl Quiz {
    pub fn creator_name(&self) -> &str {
        self.creator.as_ref().and_then(|c| c.name.as_deref()).unwrap_or("no name")
    }

    pub fn creator_email(&self) -> &str {
        self.creator.as_ref().and_then(|c| c.email.as_deref()).unwrap_or("no email")
    }

    pub fn anti_cheat(&self) -> AntiCheat {
        self.settings.as_ref().map(|s| s.anti_cheat).unwrap_or_default()
    }
}

/// `data` of the quiz list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizList {
    pub quizzes: Vec<Quiz>,
}

/// `data` of the quiz review endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizReview {
    pub quiz: Quiz,
}

// =============================================================================
// ANALYTICS / SYSTEM
// =============================================================================

/// Headline numbers for the dashboard home.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_signups: u64,
    pub total_quizzes: u64,
    pub pending_quizzes: u64,
    pub total_revenue: f64,
}

/// Flatten the scalar top-level fields of an analytics/health payload into
/// display rows, sorted by key. Nested values are skipped.
pub fn summary_rows(value: &serde_json::Value) -> Vec<(String, String)> {
    let Some(map) = value.as_object() else {
        return Vec::new();
    };
    let mut rows: Vec<(String, String)> = map
        .iter()
        .filter_map(|(key, v)| {
            let rendered = match v {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.clone(), rendered))
        })
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityLog {
    #[serde(rename = "_id")]
    pub id: String,
    pub action: String,
    pub actor: Option<String>,
    pub details: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityLogList {
    pub logs: Vec<ActivityLog>,
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Rejected,
    Refunded,
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Rejected => "rejected",
            Self::Refunded => "refunded",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub status: TransactionStatus,
    pub user: Option<QuizCreator>,
    pub created_at: Option<String>,
}

impl Transaction {
    /// Pending withdrawals are the only transactions an admin can approve or reject.
    pub fn is_actionable_withdrawal(&self) -> bool {
        self.status == TransactionStatus::Pending && self.kind.eq_ignore_ascii_case("withdrawal")
    }

    pub fn is_refundable(&self) -> bool {
        self.status == TransactionStatus::Completed && !self.kind.eq_ignore_ascii_case("refund")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
}

/// Body of `POST /admin/transactions/refund`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    pub transaction_id: String,
    pub amount: f64,
    pub reason: String,
}
