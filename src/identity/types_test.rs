use super::*;

#[test]
fn role_from_claim_admin_case_insensitive() {
    assert_eq!(Role::from_claim(Some("admin")), Role::Admin);
    assert_eq!(Role::from_claim(Some(" Admin ")), Role::Admin);
}

#[test]
fn role_from_claim_anything_else_is_user() {
    assert_eq!(Role::from_claim(None), Role::User);
    assert_eq!(Role::from_claim(Some("")), Role::User);
    assert_eq!(Role::from_claim(Some("authenticated")), Role::User);
    assert_eq!(Role::from_claim(Some("administrator")), Role::User);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn rejected_error_displays_service_message() {
    let err = IdentityError::Rejected { status: 400, message: "Invalid login credentials".into() };
    assert_eq!(err.to_string(), "Invalid login credentials");
}
