//! Session tokens and the in-memory session store.
//!
//! ARCHITECTURE
//! ============
//! The browser holds a random 32-byte hex token in an HttpOnly cookie. The
//! store keys sessions by the SHA-256 of that token, so the raw token never
//! sits in server memory after the response is sent.
//!
//! TRADE-OFFS
//! ==========
//! Sessions live in process memory and are lost on restart. Visitors then
//! read as unauthenticated and sign in again; the identity service keeps the
//! accounts.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::identity::{Identity, Role};

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Digest used as the store key for a session token.
#[must_use]
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

// =============================================================================
// SESSION
// =============================================================================

/// Authenticated user and role, held for one browser.
#[derive(Debug, Clone)]
pub struct Session {
    pub identity: Identity,
    pub role: Role,
    /// Identity-service bearer token, kept only to revoke it on logout.
    pub(crate) access_token: String,
    pub expires_at: Instant,
}

impl Session {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Serializable view of the current session for `/api/auth/me`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    #[serde(flatten)]
    pub identity: Identity,
    pub role: Role,
    pub is_admin: bool,
}

impl From<&Session> for SessionUser {
    fn from(session: &Session) -> Self {
        Self { identity: session.identity.clone(), role: session.role, is_admin: session.is_admin() }
    }
}

// =============================================================================
// STORE
// =============================================================================

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session and return the token for the browser cookie.
    pub async fn insert(&self, session: Session) -> String {
        let token = generate_token();
        self.inner.write().await.insert(hash_token(&token), session);
        token
    }

    /// Look up a live session. An expired session is removed and reads as absent.
    pub async fn get(&self, token: &str) -> Option<Session> {
        let key = hash_token(token);
        let now = Instant::now();
        {
            let sessions = self.inner.read().await;
            match sessions.get(&key) {
                None => return None,
                Some(session) if !session.is_expired(now) => return Some(session.clone()),
                Some(_) => {}
            }
        }
        let mut sessions = self.inner.write().await;
        if sessions.get(&key).is_some_and(|s| s.is_expired(now)) {
            sessions.remove(&key);
            debug!("expired session removed on read");
        }
        None
    }

    /// Remove a session, returning it if it existed.
    pub async fn remove(&self, token: &str) -> Option<Session> {
        self.inner.write().await.remove(&hash_token(token))
    }

    /// Drop every expired session. Returns the number removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// Spawn the background task that purges expired sessions. Returns a handle for shutdown.
pub fn spawn_session_sweeper(store: SessionStore, interval: Duration) -> JoinHandle<()> {
    info!(?interval, "session sweeper configured");
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            let removed = store.purge_expired().await;
            if removed > 0 {
                let remaining = store.len().await;
                debug!(removed, remaining, "expired sessions purged");
            }
        }
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
