//! Auth context — login, signup, logout and the current session.
//!
//! DESIGN
//! ======
//! `AuthContext` is the only writer of the session store. Credential checks
//! and account creation are delegated to the identity service; on failure
//! the store is left untouched and the caller shows the error message.
//!
//! A login or signup for an email that already has one in flight fails fast
//! with `AuthError::InProgress` instead of issuing a second service call.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::identity::{IdentityError, IdentityService};
use crate::services::session::{Session, SessionStore};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error("A request for this account is already in progress.")]
    InProgress,
}

impl AuthError {
    /// Message safe to show the visitor.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Identity(IdentityError::Rejected { message, .. }) => message.clone(),
            Self::Identity(IdentityError::Transport(_)) => {
                "Unable to reach the authentication service. Please try again.".to_owned()
            }
            Self::Identity(IdentityError::Parse(_) | IdentityError::HttpClientBuild(_)) => {
                "Unexpected response from the authentication service.".to_owned()
            }
            Self::InProgress => self.to_string(),
        }
    }

    /// HTTP status the identity service answered with, if it answered at all.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Identity(IdentityError::Rejected { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// ACCESS
// =============================================================================

/// Who is making a request, as seen by the route guards.
#[derive(Debug, Clone)]
pub enum Access {
    Unauthenticated,
    User(Session),
    Admin(Session),
}

impl Access {
    #[must_use]
    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            None => Self::Unauthenticated,
            Some(s) if s.is_admin() => Self::Admin(s),
            Some(s) => Self::User(s),
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Unauthenticated => None,
            Self::User(s) | Self::Admin(s) => Some(s),
        }
    }
}

// =============================================================================
// IN-FLIGHT GUARD
// =============================================================================

/// Marks an email as busy until dropped.
struct InFlight {
    set: Arc<Mutex<HashSet<String>>>,
    key: String,
}

impl InFlight {
    fn acquire(set: &Arc<Mutex<HashSet<String>>>, email: &str) -> Result<Self, AuthError> {
        let key = email.trim().to_ascii_lowercase();
        let mut guard = set.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if !guard.insert(key.clone()) {
            return Err(AuthError::InProgress);
        }
        Ok(Self { set: Arc::clone(set), key })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let mut guard = self
            .set
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.remove(&self.key);
    }
}

// =============================================================================
// AUTH CONTEXT
// =============================================================================

#[derive(Clone)]
pub struct AuthContext {
    identity: Arc<dyn IdentityService>,
    sessions: SessionStore,
    in_flight: Arc<Mutex<HashSet<String>>>,
    max_age: Duration,
}

impl AuthContext {
    #[must_use]
    pub fn new(identity: Arc<dyn IdentityService>, max_age: Duration) -> Self {
        Self { identity, sessions: SessionStore::new(), in_flight: Arc::default(), max_age }
    }

    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    #[must_use]
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Sign in with email and password. Returns the new session and the token
    /// to hand to the browser.
    ///
    /// # Errors
    ///
    /// Returns the identity service's rejection, a transport failure, or
    /// `InProgress` when a request for the same email is still pending.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, Session), AuthError> {
        let _busy = InFlight::acquire(&self.in_flight, email)?;
        let sign_in = self.identity.sign_in(email.trim(), password).await?;

        let lifetime = sign_in
            .expires_in
            .map_or(self.max_age, |secs| Duration::from_secs(secs).min(self.max_age));
        let session = Session {
            identity: sign_in.identity,
            role: sign_in.role,
            access_token: sign_in.access_token,
            expires_at: Instant::now() + lifetime,
        };
        let token = self.sessions.insert(session.clone()).await;
        info!(user_id = %session.identity.id, role = session.role.as_str(), "login succeeded");
        Ok((token, session))
    }

    /// Create an account. Does not sign the visitor in.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AuthContext::login`].
    pub async fn signup(&self, email: &str, password: &str, name: &str) -> Result<(), AuthError> {
        let _busy = InFlight::acquire(&self.in_flight, email)?;
        self.identity
            .sign_up(email.trim(), password, name.trim())
            .await?;
        info!("account created; awaiting confirmation");
        Ok(())
    }

    /// End a session. The local session is always removed; a failed token
    /// revocation at the identity service is only logged.
    pub async fn logout(&self, token: &str) -> bool {
        let Some(session) = self.sessions.remove(token).await else {
            return false;
        };
        if let Err(e) = self.identity.sign_out(&session.access_token).await {
            warn!(error = %e, user_id = %session.identity.id, "identity sign-out failed");
        }
        info!(user_id = %session.identity.id, "logout");
        true
    }

    /// Resolve the access level for an optional session token.
    pub async fn current(&self, token: Option<&str>) -> Access {
        match token.filter(|t| !t.is_empty()) {
            Some(t) => Access::from_session(self.sessions.get(t).await),
            None => Access::Unauthenticated,
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
