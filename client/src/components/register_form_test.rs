use super::*;

fn valid() -> Result<RegisterRequest, RegisterInputError> {
    validate_register_input(" bob ", " bob@example.com ", "correct horse", "correct horse")
}

#[test]
fn validate_register_input_trims_username_and_email() {
    assert_eq!(
        valid(),
        Ok(RegisterRequest {
            username: "bob".to_owned(),
            email: "bob@example.com".to_owned(),
            password: "correct horse".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_requires_all_fields() {
    assert_eq!(
        validate_register_input("", "bob@example.com", "password1", "password1"),
        Err(RegisterInputError::MissingFields)
    );
    assert_eq!(
        validate_register_input("bob", "  ", "password1", "password1"),
        Err(RegisterInputError::MissingFields)
    );
    assert_eq!(
        validate_register_input("bob", "bob@example.com", "", ""),
        Err(RegisterInputError::MissingFields)
    );
}

#[test]
fn validate_register_input_rejects_malformed_email() {
    for email in ["bob", "@example.com", "bob@localhost", "bob@.com", "bob@example."] {
        assert_eq!(
            validate_register_input("bob", email, "password1", "password1"),
            Err(RegisterInputError::InvalidEmail),
            "{email}"
        );
    }
}

#[test]
fn validate_register_input_enforces_min_password_length() {
    assert_eq!(
        validate_register_input("bob", "bob@example.com", "short", "short"),
        Err(RegisterInputError::PasswordTooShort)
    );
    assert!(validate_register_input("bob", "bob@example.com", "exactly8", "exactly8").is_ok());
}

#[test]
fn validate_register_input_requires_matching_confirmation() {
    assert_eq!(
        validate_register_input("bob", "bob@example.com", "password1", "password2"),
        Err(RegisterInputError::PasswordMismatch)
    );
}

#[test]
fn error_messages_mention_the_minimum_length() {
    assert!(RegisterInputError::PasswordTooShort.message().contains(&MIN_PASSWORD_LEN.to_string()));
}

#[test]
fn complete_registration_confirms_and_switches_to_login() {
    use crate::state::overlay::OverlayState;

    let flash = FlashMessage::new();
    let overlay = RwSignal::new(OverlayState::Register);
    let switch_to_login = Callback::new(move |()| overlay.update(OverlayState::switch_to_login));

    complete_registration(Some(flash), switch_to_login);

    assert_eq!(overlay.get_untracked(), OverlayState::Login);
    assert_eq!(flash.current().as_deref(), Some(REGISTERED_MESSAGE));
}

#[test]
fn complete_registration_switches_without_banner_context() {
    use crate::state::overlay::OverlayState;

    let overlay = RwSignal::new(OverlayState::Register);
    let switch_to_login = Callback::new(move |()| overlay.update(OverlayState::switch_to_login));

    complete_registration(None, switch_to_login);

    assert!(overlay.get_untracked().is_login_open());
}
