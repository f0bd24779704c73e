//! Login and signup form validation.
//!
//! Runs before any identity-service call; a validation error blocks the
//! submission entirely.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter both email and password.")]
    MissingLoginFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please fill in all fields.")]
    MissingSignupFields,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Validated credentials. Lives only for the duration of one submission.
#[derive(Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl LoginForm {
    /// # Errors
    ///
    /// `MissingLoginFields` when the email (after trimming) or password is empty.
    pub fn validate(self) -> Result<Credentials, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingLoginFields);
        }
        Ok(Credentials { email: email.to_owned(), password: self.password, name: None })
    }
}

impl SignupForm {
    /// Password confirmation is checked before required fields.
    ///
    /// # Errors
    ///
    /// `PasswordMismatch` or `MissingSignupFields`.
    pub fn validate(self) -> Result<Credentials, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        let email = self.email.trim();
        let name = self.name.trim();
        if email.is_empty() || self.password.is_empty() || name.is_empty() {
            return Err(ValidationError::MissingSignupFields);
        }
        Ok(Credentials { email: email.to_owned(), password: self.password, name: Some(name.to_owned()) })
    }
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
