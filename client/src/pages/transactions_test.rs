use super::*;

#[test]
fn refund_form_requires_every_field() {
    assert_eq!(parse_refund(" ", "10", "dup"), Err("Transaction ID is required"));
    assert_eq!(parse_refund("t1", "abc", "dup"), Err("Enter a refund amount greater than zero"));
    assert_eq!(parse_refund("t1", "0", "dup"), Err("Enter a refund amount greater than zero"));
    assert_eq!(parse_refund("t1", "10", "  "), Err("Please provide a reason for the refund"));
}

#[test]
fn refund_form_trims_into_request() {
    assert_eq!(
        parse_refund(" t1 ", " 12.5 ", " charged twice "),
        Ok(RefundRequest { transaction_id: "t1".into(), amount: 12.5, reason: "charged twice".into() })
    );
}

#[test]
fn apply_transaction_status_updates_in_place() {
    let mut list = vec![
        Transaction { id: "a".into(), ..Transaction::default() },
        Transaction { id: "b".into(), ..Transaction::default() },
    ];
    assert!(apply_transaction_status(&mut list, "b", TransactionStatus::Rejected));
    assert_eq!(list[0].status, TransactionStatus::Pending);
    assert_eq!(list[1].status, TransactionStatus::Rejected);
    assert!(!apply_transaction_status(&mut list, "zz", TransactionStatus::Completed));
}

#[test]
fn status_filters_start_with_all() {
    assert_eq!(STATUS_FILTERS[0], ("", "All"));
}
