use super::*;
use serde_json::json;

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_missing_fields_default() {
    let env: Envelope<Vec<UserRecord>> = serde_json::from_value(json!({})).unwrap();
    assert!(!env.success);
    assert!(env.message.is_none());
    assert!(env.data.is_none());
}

#[test]
fn envelope_message_or_prefers_server_message() {
    let env: Envelope<()> = Envelope { success: false, message: Some("Unauthorized".into()), data: None };
    assert_eq!(env.message_or("Failed"), "Unauthorized");
}

#[test]
fn envelope_message_or_ignores_blank_message() {
    let env: Envelope<()> = Envelope { success: false, message: Some("  ".into()), data: None };
    assert_eq!(env.message_or("Failed"), "Failed");
}

// =============================================================
// Records
// =============================================================

#[test]
fn user_record_reads_mongo_id_and_defaults() {
    let user: UserRecord = serde_json::from_value(json!({
        "_id": "u1",
        "name": "bob",
        "email": "bob@example.com"
    }))
    .unwrap();
    assert_eq!(user.id, "u1");
    assert!(!user.active);
    assert_eq!(user.role_label(), "User");
    assert_eq!(user.balance, None);
    assert_eq!(user.initial(), "B");
}

#[test]
fn contact_status_uses_kebab_case_and_tolerates_unknown() {
    let contact: ContactRequest = serde_json::from_value(json!({
        "_id": "c1",
        "status": "in-progress",
        "createdAt": "2024-03-05T10:30:00Z"
    }))
    .unwrap();
    assert_eq!(contact.status, ContactStatus::InProgress);
    assert_eq!(contact.created_at.as_deref(), Some("2024-03-05T10:30:00Z"));

    let odd: ContactRequest = serde_json::from_value(json!({"status": "archived"})).unwrap();
    assert_eq!(odd.status, ContactStatus::Unknown);
}

#[test]
fn contact_status_parse_only_accepts_assignable() {
    assert_eq!(ContactStatus::parse("resolved"), Some(ContactStatus::Resolved));
    assert_eq!(ContactStatus::parse("unknown"), None);
    assert_eq!(serde_json::to_value(ContactStatus::InProgress).unwrap(), json!("in-progress"));
}

#[test]
fn quiz_list_payload_reads_nested_fields() {
    let list: QuizList = serde_json::from_value(json!({
        "quizzes": [{
            "_id": "q1",
            "title": "Rust Basics",
            "isPaid": true,
            "price": 49.0,
            "timeLimit": 15,
            "status": "pending",
            "creator": {"name": "Ada"},
            "questions": [{"text": "2+2?", "options": ["3", "4"], "correctAnswer": 1}],
            "settings": {"antiCheat": {"detectTabSwitch": true}}
        }]
    }))
    .unwrap();
    let quiz = &list.quizzes[0];
    assert!(quiz.is_paid);
    assert_eq!(quiz.time_limit, Some(15));
    assert_eq!(quiz.creator_name(), "Ada");
    assert_eq!(quiz.creator_email(), "no email");
    assert_eq!(quiz.questions[0].correct_answer, Some(1));
    assert!(quiz.anti_cheat().detect_tab_switch);
    assert!(!quiz.anti_cheat().force_fullscreen);
}

#[test]
fn transaction_actionability() {
    let withdrawal = Transaction {
        kind: "withdrawal".into(),
        status: TransactionStatus::Pending,
        ..Transaction::default()
    };
    assert!(withdrawal.is_actionable_withdrawal());
    assert!(!withdrawal.is_refundable());

    let purchase = Transaction {
        kind: "purchase".into(),
        status: TransactionStatus::Completed,
        ..Transaction::default()
    };
    assert!(!purchase.is_actionable_withdrawal());
    assert!(purchase.is_refundable());
}

#[test]
fn refund_request_serializes_camel_case() {
    let body = RefundRequest { transaction_id: "t1".into(), amount: 10.5, reason: "dup".into() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"transactionId": "t1", "amount": 10.5, "reason": "dup"})
    );
}

// =============================================================
// summary_rows
// =============================================================

#[test]
fn summary_rows_keeps_sorted_scalars_only() {
    let rows = summary_rows(&json!({
        "uptime": "3d",
        "activeUsers": 12,
        "healthy": true,
        "nested": {"a": 1},
        "list": [1, 2]
    }));
    assert_eq!(
        rows,
        vec![
            ("activeUsers".to_owned(), "12".to_owned()),
            ("healthy".to_owned(), "true".to_owned()),
            ("uptime".to_owned(), "3d".to_owned()),
        ]
    );
}

#[test]
fn summary_rows_non_object_is_empty() {
    assert!(summary_rows(&json!([1, 2])).is_empty());
}
