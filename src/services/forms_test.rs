use super::*;

fn login(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.into(), password: password.into() }
}

fn signup(name: &str, email: &str, password: &str, confirm: &str) -> SignupForm {
    SignupForm { name: name.into(), email: email.into(), password: password.into(), confirm_password: confirm.into() }
}

// =============================================================================
// LoginForm
// =============================================================================

#[test]
fn login_requires_both_fields() {
    for (email, password) in [("", "pw"), ("a@b.com", ""), ("", ""), ("   ", "pw")] {
        assert_eq!(
            login(email, password).validate(),
            Err(ValidationError::MissingLoginFields),
            "expected rejection for {email:?}/{password:?}"
        );
    }
}

#[test]
fn login_trims_email_but_not_password() {
    let creds = login("  a@b.com ", " pw ").validate().unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, " pw ");
    assert_eq!(creds.name, None);
}

#[test]
fn login_error_message() {
    assert_eq!(ValidationError::MissingLoginFields.to_string(), "Please enter both email and password.");
}

// =============================================================================
// SignupForm
// =============================================================================

#[test]
fn signup_mismatch_reports_passwords_do_not_match() {
    let err = signup("Ann", "a@b.com", "x", "y").validate().unwrap_err();
    assert_eq!(err, ValidationError::PasswordMismatch);
    assert_eq!(err.to_string(), "Passwords do not match.");
}

#[test]
fn signup_mismatch_checked_before_missing_fields() {
    assert_eq!(signup("", "", "x", "y").validate(), Err(ValidationError::PasswordMismatch));
}

#[test]
fn signup_requires_all_fields() {
    for form in [
        signup("", "a@b.com", "pw", "pw"),
        signup("Ann", " ", "pw", "pw"),
        signup("Ann", "a@b.com", "", ""),
    ] {
        assert_eq!(form.validate(), Err(ValidationError::MissingSignupFields));
    }
    assert_eq!(ValidationError::MissingSignupFields.to_string(), "Please fill in all fields.");
}

#[test]
fn signup_valid_yields_credentials_with_name() {
    let creds = signup(" Ann Ranger ", "a@b.com", "pw", "pw").validate().unwrap();
    assert_eq!(
        creds,
        Credentials { email: "a@b.com".into(), password: "pw".into(), name: Some("Ann Ranger".into()) }
    );
}

#[test]
fn signup_form_deserializes_with_missing_fields() {
    let form: SignupForm = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
    assert_eq!(form.email, "a@b.com");
    assert!(form.confirm_password.is_empty());
}
