//! GoTrue (Supabase Auth) HTTP client.
//!
//! Thin wrapper over the password grant, signup and logout endpoints. Pure
//! parsing in `parse_sign_in` and `parse_error_message` for testability.

use std::time::Duration;

use serde::Deserialize;
use uuid::Uuid;

use super::{Identity, IdentityError, IdentityService, Role, SignIn};
use crate::config::IdentityConfig;

// =============================================================================
// CLIENT
// =============================================================================

pub struct GoTrueClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl GoTrueClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &IdentityConfig) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| IdentityError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.url.clone(), anon_key: config.anon_key.clone() })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    /// Send a request and return the body of a 2xx response.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, IdentityError> {
        let response = request
            .header("apikey", &self.anon_key)
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(IdentityError::Rejected { status, message: parse_error_message(status, &text) });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl IdentityService for GoTrueClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignIn, IdentityError> {
        let request = self
            .http
            .post(self.endpoint("token?grant_type=password"))
            .json(&serde_json::json!({ "email": email, "password": password }));
        let body = self.send(request).await?;
        parse_sign_in(&body)
    }

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<(), IdentityError> {
        let request = self.http.post(self.endpoint("signup")).json(&serde_json::json!({
            "email": email,
            "password": password,
            "data": { "name": name },
        }));
        self.send(request).await?;
        Ok(())
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        let request = self
            .http
            .post(self.endpoint("logout"))
            .bearer_auth(access_token);
        self.send(request).await?;
        Ok(())
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<u64>,
    user: UserResponse,
}

#[derive(Deserialize)]
struct UserResponse {
    id: Uuid,
    email: Option<String>,
    #[serde(default)]
    app_metadata: AppMetadata,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Deserialize, Default)]
struct AppMetadata {
    role: Option<String>,
}

#[derive(Deserialize, Default)]
struct UserMetadata {
    name: Option<String>,
}

#[derive(Deserialize, Default)]
struct ErrorResponse {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_sign_in(json: &str) -> Result<SignIn, IdentityError> {
    let token: TokenResponse = serde_json::from_str(json).map_err(|e| IdentityError::Parse(e.to_string()))?;
    let user = token.user;
    let email = user.email.unwrap_or_default();
    let name = user
        .user_metadata
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| name_from_email(&email));

    Ok(SignIn {
        identity: Identity { id: user.id, email, name },
        role: Role::from_claim(user.app_metadata.role.as_deref()),
        access_token: token.access_token,
        expires_in: token.expires_in,
    })
}

/// Pick the most descriptive message from an error body, falling back to a
/// status-based message when the body carries none.
fn parse_error_message(status: u16, body: &str) -> String {
    let parsed: ErrorResponse = serde_json::from_str(body).unwrap_or_default();
    [parsed.error_description, parsed.msg, parsed.message, parsed.error]
        .into_iter()
        .flatten()
        .find(|m| !m.trim().is_empty())
        .unwrap_or_else(|| match status {
            400 | 401 => "Invalid login credentials".to_owned(),
            422 => "The request could not be processed".to_owned(),
            429 => "Too many requests, please try again later".to_owned(),
            _ => format!("Identity service error (status {status})"),
        })
}

fn name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("user")
        .to_owned()
}

#[cfg(test)]
#[path = "gotrue_test.rs"]
mod tests;
