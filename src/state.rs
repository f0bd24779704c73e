//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the auth context, which is created once at start-up and owns every
//! session, plus the cookie policy handlers need when writing responses.

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::identity::IdentityService;
use crate::services::auth::AuthContext;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthContext,
    /// Whether cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(identity: Arc<dyn IdentityService>, config: &AppConfig) -> Self {
        Self {
            auth: AuthContext::new(identity, Duration::from_secs(config.session_max_age_secs)),
            cookie_secure: config.cookie_secure,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
