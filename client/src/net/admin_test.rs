use super::*;

fn cfg() -> ApiConfig {
    ApiConfig::new("http://h/v1")
}

// =============================================================
// QuizFilter
// =============================================================

#[test]
fn pending_tab_uses_pending_endpoint() {
    assert_eq!(QuizFilter::Pending.list_url(&cfg()), "http://h/v1/admin/quizzes/pending");
}

#[test]
fn status_tabs_filter_full_list() {
    assert_eq!(
        QuizFilter::Approved.list_url(&cfg()),
        "http://h/v1/admin/quizzes?status=approved"
    );
    assert_eq!(
        QuizFilter::Rejected.list_url(&cfg()),
        "http://h/v1/admin/quizzes?status=rejected"
    );
}

#[test]
fn all_tab_sends_no_filter() {
    assert_eq!(QuizFilter::All.list_url(&cfg()), "http://h/v1/admin/quizzes");
}

#[test]
fn ai_quizzes_filter_by_source() {
    assert_eq!(ai_quizzes_url(&cfg()), "http://h/v1/admin/quizzes?source=ai");
}

// =============================================================
// Analytics
// =============================================================

#[test]
fn period_round_trips_through_query_value() {
    for period in Period::ALL {
        assert_eq!(Period::parse(period.as_str()), Some(period));
    }
    assert_eq!(Period::parse("1y"), None);
    assert_eq!(Period::default(), Period::Month);
}

#[test]
fn analytics_urls_carry_period() {
    assert_eq!(
        Analytics::Users.url(&cfg(), Period::Week),
        "http://h/v1/admin/analytics/users?period=7d"
    );
    assert_eq!(
        Analytics::Revenue.url(&cfg(), Period::Quarter),
        "http://h/v1/admin/analytics/revenue?period=90d"
    );
}

// =============================================================
// Bodies
// =============================================================

#[test]
fn moderation_bodies_match_backend_fields() {
    assert_eq!(
        serde_json::to_value(Reason { reason: "spam" }).unwrap(),
        serde_json::json!({"reason": "spam"})
    );
    assert_eq!(
        serde_json::to_value(Feedback { feedback: "" }).unwrap(),
        serde_json::json!({"feedback": ""})
    );
}
