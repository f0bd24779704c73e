//! Identity types — provider-neutral account, role and error types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by identity service operations.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The HTTP request to the identity service failed.
    #[error("identity service unreachable: {0}")]
    Transport(String),

    /// The service answered with a non-success status. `message` is the
    /// human-readable reason it gave, suitable for showing to the user.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The service response body could not be deserialized.
    #[error("identity response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// ROLE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Map the service's role claim to a role. Anything but `admin` is a user.
    #[must_use]
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim.map(str::trim) {
            Some(c) if c.eq_ignore_ascii_case("admin") => Self::Admin,
            _ => Self::User,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

// =============================================================================
// IDENTITY
// =============================================================================

/// Opaque reference to an account held by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

/// Successful password sign-in.
#[derive(Debug, Clone)]
pub struct SignIn {
    pub identity: Identity,
    pub role: Role,
    /// Bearer token issued by the service; used again only to sign out.
    pub access_token: String,
    /// Token lifetime in seconds, if the service reported one.
    pub expires_in: Option<u64>,
}

// =============================================================================
// SERVICE TRAIT
// =============================================================================

/// External identity service. Implemented by [`super::GoTrueClient`] and by
/// test doubles.
#[async_trait::async_trait]
pub trait IdentityService: Send + Sync {
    /// Check credentials and open an authenticated session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignIn, IdentityError>;

    /// Create an account. The service may require email confirmation, so this
    /// never authenticates.
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<(), IdentityError>;

    /// Revoke an access token issued by `sign_in`.
    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError>;
}
