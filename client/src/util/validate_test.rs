use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_common_addresses() {
    assert!(is_valid_email("ada@example.com"));
    assert!(is_valid_email("  a.b+c@sub.domain.io "));
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["", "plain", "a@b", "@b.co", "a@.co x", "a b@c.io", "a@@b.io"] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

// =============================================================
// Password strength
// =============================================================

#[test]
fn score_counts_each_rule_once() {
    assert_eq!(password_score(""), 0);
    assert_eq!(password_score("abcdefgh"), 1);
    assert_eq!(password_score("abcdefgH"), 2);
    assert_eq!(password_score("abcdefgH1"), 3);
    assert_eq!(password_score("abcdefgH1!"), 4);
    assert_eq!(password_score("abcdefgH1!xyz"), 5);
}

#[test]
fn strength_buckets() {
    assert_eq!(password_strength("abc"), PasswordStrength::Weak);
    assert_eq!(password_strength("abcdefgh"), PasswordStrength::Weak);
    assert_eq!(password_strength("abcdefgH"), PasswordStrength::Fair);
    assert_eq!(password_strength("abcdefgH1"), PasswordStrength::Good);
    assert_eq!(password_strength("abcdefgH1!"), PasswordStrength::Strong);
    assert!(PasswordStrength::Fair > PasswordStrength::Weak);
}

// =============================================================
// Signup form
// =============================================================

#[test]
fn signup_reports_first_problem() {
    assert_eq!(validate_signup(" ", "a@b.co", "abcdefgH1"), Err("Name is required".into()));
    assert_eq!(
        validate_signup("Ada", "nope", "abcdefgH1"),
        Err("Enter a valid email address".into())
    );
    assert_eq!(
        validate_signup("Ada", "a@b.co", "aB1!"),
        Err("Password must be at least 8 characters".into())
    );
    assert_eq!(validate_signup("Ada", "a@b.co", "abcdefgh"), Err("Password is too weak".into()));
    assert_eq!(validate_signup("Ada", "a@b.co", "abcdefgH"), Ok(()));
}

// =============================================================
// Reasons
// =============================================================

#[test]
fn reason_length_is_checked_after_trimming() {
    assert!(validate_reason("   ten chars!   ").is_ok());
    assert!(validate_reason("  short   ").is_err());
    assert_eq!(validate_reason("  spam content  "), Ok("spam content".into()));
    assert!(validate_reason(&"x".repeat(REASON_MAX_CHARS)).is_ok());
    assert!(validate_reason(&"x".repeat(REASON_MAX_CHARS + 1)).is_err());
}
