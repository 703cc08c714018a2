use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice ", "secret"),
        Ok(LoginRequest { username: "alice".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let request = validate_login_input("alice", " pass word ").expect("valid");
    assert_eq!(request.password, " pass word ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("alice", ""), Err(MISSING_FIELDS));
}
