use super::*;
use crate::net::types::QuizCreator;

fn user(name: &str, email: &str, active: bool, balance: Option<f64>) -> UserRecord {
    UserRecord {
        id: name.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        active,
        balance,
        ..UserRecord::default()
    }
}

fn contact(name: &str, subject: &str, status: ContactStatus) -> ContactRequest {
    ContactRequest {
        id: name.to_owned(),
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        subject: subject.to_owned(),
        status,
        ..ContactRequest::default()
    }
}

fn names(users: &[UserRecord]) -> Vec<&str> {
    users.iter().map(|u| u.name.as_str()).collect()
}

// =============================================================
// SearchTerm
// =============================================================

#[test]
fn empty_or_blank_search_matches_everything() {
    assert!(SearchTerm::new("").matches_any(["anything"]));
    assert!(SearchTerm::new("   ").matches_any(std::iter::empty()));
}

#[test]
fn search_is_trimmed_and_case_insensitive() {
    let term = SearchTerm::new("  BoB ");
    assert!(term.matches_any(["Robert", "BOBBY@x.io"]));
    assert!(!term.matches_any(["alice"]));
}

// =============================================================
// Users
// =============================================================

#[test]
fn user_search_matches_name_or_email_preserving_order() {
    let users = vec![
        user("Alice", "bob.fan@example.com", true, None),
        user("Carol", "carol@example.com", true, None),
        user("BOB", "b@example.com", false, None),
        user("Dave", "dave@bobcat.io", true, None),
    ];
    assert_eq!(names(&filter_users(&users, "bob")), vec!["Alice", "BOB", "Dave"]);
}

#[test]
fn dashboard_filters_compose() {
    let users = vec![
        user("a", "a@x.io", true, Some(50.0)),
        user("b", "b@x.io", false, Some(150.0)),
        user("c", "c@x.io", true, Some(500.0)),
        user("d", "d@x.io", true, None),
    ];
    let range = BalanceRange::parse("10", "200");
    assert_eq!(names(&filter_dashboard_users(&users, "", ActiveFilter::All, range)), vec!["a", "b"]);
    assert_eq!(names(&filter_dashboard_users(&users, "", ActiveFilter::Active, range)), vec!["a"]);
    assert_eq!(
        names(&filter_dashboard_users(&users, "", ActiveFilter::Inactive, BalanceRange::default())),
        vec!["b"]
    );
}

#[test]
fn balance_range_open_sides_and_missing_balance() {
    let range = BalanceRange::parse("", "abc");
    assert_eq!(range, BalanceRange::default());
    assert!(range.contains(None));

    let min_only = BalanceRange::parse("0", "");
    assert!(min_only.contains(None));
    assert!(!min_only.contains(Some(-1.0)));

    let bounded = BalanceRange::parse("5", "5");
    assert!(bounded.contains(Some(5.0)));
}

#[test]
fn active_filter_parse_defaults_to_all() {
    assert_eq!(ActiveFilter::parse("inactive"), ActiveFilter::Inactive);
    assert_eq!(ActiveFilter::parse("bogus"), ActiveFilter::All);
}

// =============================================================
// Contacts
// =============================================================

#[test]
fn contact_search_covers_subject_and_status_filter() {
    let contacts = vec![
        contact("Ann", "Refund request", ContactStatus::Pending),
        contact("Ben", "Bug report", ContactStatus::Resolved),
        contact("Cat", "Refund again", ContactStatus::Resolved),
    ];
    let hits = filter_contacts(&contacts, "refund", None);
    assert_eq!(hits.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), vec!["Ann", "Cat"]);

    let resolved = filter_contacts(&contacts, "refund", Some(ContactStatus::Resolved));
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].name, "Cat");

    let by_email = filter_contacts(&contacts, "ben@", None);
    assert_eq!(by_email[0].name, "Ben");
}

// =============================================================
// Quizzes / transactions
// =============================================================

#[test]
fn quiz_search_covers_title_creator_and_category() {
    let quizzes = vec![
        Quiz { id: "1".into(), title: "Rust Basics".into(), ..Quiz::default() },
        Quiz {
            id: "2".into(),
            title: "Algebra".into(),
            creator: Some(QuizCreator { name: Some("Rusty".into()), email: None }),
            ..Quiz::default()
        },
        Quiz { id: "3".into(), title: "Geo".into(), category: Some("trust".into()), ..Quiz::default() },
        Quiz { id: "4".into(), title: "History".into(), ..Quiz::default() },
    ];
    let ids: Vec<String> = filter_quizzes(&quizzes, "rust").into_iter().map(|q| q.id).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn transaction_search_covers_type_and_user() {
    let transactions = vec![
        Transaction { id: "t1".into(), kind: "withdrawal".into(), ..Transaction::default() },
        Transaction {
            id: "t2".into(),
            kind: "purchase".into(),
            user: Some(QuizCreator { name: Some("Wendy".into()), email: None }),
            ..Transaction::default()
        },
        Transaction { id: "t3".into(), kind: "purchase".into(), ..Transaction::default() },
    ];
    let ids: Vec<String> = filter_transactions(&transactions, "w").into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["t1", "t2"]);
}
