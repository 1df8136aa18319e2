use super::*;

#[test]
fn build_signup_trims_and_omits_blank_secret() {
    let fields = build_signup(" Ada ", " ada@example.com ", "abcdefgH1", "   ").unwrap();
    assert_eq!(fields.name, "Ada");
    assert_eq!(fields.email, "ada@example.com");
    assert_eq!(fields.secret_code, None);
}

#[test]
fn build_signup_keeps_secret_code() {
    let fields = build_signup("Ada", "ada@example.com", "abcdefgH1", " ADMIN42 ").unwrap();
    assert_eq!(fields.secret_code.as_deref(), Some("ADMIN42"));
}

#[test]
fn build_signup_surfaces_validation_errors() {
    assert_eq!(
        build_signup("Ada", "ada@example.com", "short", ""),
        Err("Password must be at least 8 characters".to_owned())
    );
}
