use super::*;

#[test]
fn validate_login_input_trims_email_and_requires_both() {
    assert_eq!(
        validate_login_input("  admin@example.com ", "secret"),
        Ok(Credentials { email: "admin@example.com".into(), password: "secret".into() })
    );
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.co", ""), Err("Enter both email and password."));
}

#[test]
fn password_is_not_trimmed() {
    let creds = validate_login_input("a@b.co", " pw ").unwrap();
    assert_eq!(creds.password, " pw ");
}

#[test]
fn continue_message_only_for_safe_origins() {
    assert_eq!(
        continue_message(Some("/userlist")).as_deref(),
        Some("Sign in to continue to /userlist")
    );
    assert_eq!(continue_message(None), None);
    assert_eq!(continue_message(Some("https://evil.example")), None);
}
