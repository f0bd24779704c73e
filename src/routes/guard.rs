//! Route guards — role-based access to the admin and user areas.
//!
//! DESIGN
//! ======
//! `decide` is the whole policy: a pure function over the guard kind and the
//! visitor's `Access`, matched exhaustively. A `Render` outcome carries the
//! session the page is rendered for. The extractors below only read the
//! session cookie, ask the auth context for the current `Access`, and turn a
//! `Redirect` outcome into the extractor rejection.
//!
//! | access          | `Protected`        | `Admin`            |
//! |-----------------|--------------------|--------------------|
//! | Unauthenticated | → `/admin_login`   | → `/admin_login`   |
//! | User            | render             | → `/user/dashboard`|
//! | Admin           | render             | render             |

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use super::cookies;
use super::paths;
use crate::services::auth::Access;
use crate::services::session::Session;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Any signed-in visitor.
    Protected,
    /// Signed-in admins only.
    Admin,
}

#[derive(Debug, Clone, Copy)]
pub enum GuardOutcome<'a> {
    Render(&'a Session),
    Redirect(&'static str),
}

#[must_use]
pub fn decide(guard: Guard, access: &Access) -> GuardOutcome<'_> {
    match (guard, access) {
        (Guard::Protected | Guard::Admin, Access::Unauthenticated) => GuardOutcome::Redirect(paths::LOGIN),
        (Guard::Protected, Access::User(session) | Access::Admin(session)) | (Guard::Admin, Access::Admin(session)) => {
            GuardOutcome::Render(session)
        }
        (Guard::Admin, Access::User(_)) => GuardOutcome::Redirect(paths::USER_DASHBOARD),
    }
}

// =============================================================================
// EXTRACTORS
// =============================================================================

/// The visitor's access level, whatever it is. Never rejects.
pub struct CurrentAccess(pub Access);

impl<S> FromRequestParts<S> for CurrentAccess
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = cookies::session_token(&jar);
        let app_state = AppState::from_ref(state);
        Ok(Self(app_state.auth.current(token.as_deref()).await))
    }
}

async fn guarded<S>(guard: Guard, parts: &mut Parts, state: &S) -> Result<Session, Redirect>
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    let Ok(CurrentAccess(access)) = CurrentAccess::from_request_parts(parts, state).await;
    match decide(guard, &access) {
        GuardOutcome::Render(session) => Ok(session.clone()),
        GuardOutcome::Redirect(to) => {
            debug!(path = %parts.uri.path(), ?guard, redirect = to, "guard redirect");
            Err(Redirect::to(to))
        }
    }
}

/// `ProtectedRoute`: any signed-in visitor.
pub struct RequireUser(pub Session);

impl<S> FromRequestParts<S> for RequireUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        guarded(Guard::Protected, parts, state).await.map(Self)
    }
}

/// `AdminRoute`: signed-in admins only.
pub struct RequireAdmin(pub Session);

impl<S> FromRequestParts<S> for RequireAdmin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        guarded(Guard::Admin, parts, state).await.map(Self)
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
