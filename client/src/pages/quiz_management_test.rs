use super::*;

fn quiz_with_questions(n: usize) -> Quiz {
    Quiz {
        questions: (0..n).map(|i| Question { text: format!("Q{i}"), ..Question::default() }).collect(),
        ..Quiz::default()
    }
}

// =============================================================
// Review preview
// =============================================================

#[test]
fn preview_caps_at_three_questions() {
    let quiz = quiz_with_questions(5);
    let texts: Vec<&str> = preview_questions(&quiz).iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, vec!["Q0", "Q1", "Q2"]);
    assert_eq!(more_questions_note(&quiz).as_deref(), Some("... and 2 more questions"));
}

#[test]
fn short_quiz_has_no_more_note() {
    let quiz = quiz_with_questions(3);
    assert_eq!(preview_questions(&quiz).len(), 3);
    assert_eq!(more_questions_note(&quiz), None);
    assert!(preview_questions(&quiz_with_questions(0)).is_empty());
}

// =============================================================
// Labels
// =============================================================

#[test]
fn price_label_free_unless_paid_with_price() {
    assert_eq!(price_label(&Quiz::default()), "Free");
    let paid = Quiz { is_paid: true, price: Some(49.0), ..Quiz::default() };
    assert_eq!(price_label(&paid), "₹49.00");
    let unpriced = Quiz { is_paid: true, price: None, ..Quiz::default() };
    assert_eq!(price_label(&unpriced), "Free");
}

#[test]
fn reason_counter_counts_characters() {
    assert_eq!(reason_counter(""), "0/500 characters");
    assert_eq!(reason_counter("ü"), "1/500 characters");
}

// =============================================================
// Review modal slot
// =============================================================

fn quiz_titled(id: &str, title: &str) -> Quiz {
    Quiz { id: id.to_owned(), title: title.to_owned(), ..Quiz::default() }
}

#[test]
fn late_details_for_a_previous_quiz_are_dropped() {
    // Opened A, closed, opened B; A's response arrives afterwards.
    let mut slot: ReviewSlot = Some(("quiz-b".into(), FetchState::Loading));
    assert!(!accept_review(&mut slot, "quiz-a", Ok(quiz_titled("quiz-a", "A"))));
    assert_eq!(slot, Some(("quiz-b".into(), FetchState::Loading)));
    assert_eq!(reviewed_quiz_id(&slot), None);

    assert!(accept_review(&mut slot, "quiz-b", Ok(quiz_titled("quiz-b", "B"))));
    assert_eq!(reviewed_quiz_id(&slot).as_deref(), Some("quiz-b"));
}

#[test]
fn details_after_close_are_dropped() {
    let mut slot: ReviewSlot = None;
    assert!(!accept_review(&mut slot, "quiz-a", Ok(quiz_titled("quiz-a", "A"))));
    assert_eq!(slot, None);
}

#[test]
fn failed_details_have_no_actionable_quiz() {
    let mut slot: ReviewSlot = Some(("quiz-a".into(), FetchState::Loading));
    assert!(accept_review(&mut slot, "quiz-a", Err("Failed to fetch quiz details".into())));
    assert_eq!(reviewed_quiz_id(&slot), None);
}
