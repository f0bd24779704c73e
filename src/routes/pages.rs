//! Page routes — public pages, guarded admin/user pages, and NotFound.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use super::cookies;
use super::guard::{CurrentAccess, RequireAdmin, RequireUser};
use super::paths;
use crate::services::session::Session;
use crate::state::AppState;
use crate::views::pages::{self, Page};
use crate::views::{self, layout};

/// Render a guarded page inside its layout, consuming any pending toast.
fn render(state: &AppState, jar: CookieJar, page: Page, session: &Session) -> Response {
    let (jar, toast) = cookies::take_flash(jar, state.cookie_secure);
    let body = layout::wrap(page.shell(), session, page.path(), &page.content(session));
    (jar, views::document(page.title(), toast.as_ref(), &body)).into_response()
}

/// `GET /` — redirect to the public home page.
pub async fn root() -> Redirect {
    Redirect::to(paths::HOME)
}

/// `GET /home`
pub async fn home(State(state): State<AppState>, CurrentAccess(access): CurrentAccess, jar: CookieJar) -> Response {
    let (jar, toast) = cookies::take_flash(jar, state.cookie_secure);
    (jar, views::document("Home", toast.as_ref(), &pages::home(&access))).into_response()
}

/// Fallback for every unmatched path.
pub async fn not_found(uri: Uri) -> Response {
    (StatusCode::NOT_FOUND, views::document("Not Found", None, &pages::not_found(uri.path()))).into_response()
}

// =============================================================================
// ADMIN PAGES
// =============================================================================

pub async fn admin_dashboard(State(state): State<AppState>, RequireAdmin(session): RequireAdmin, jar: CookieJar) -> Response {
    render(&state, jar, Page::AdminDashboard, &session)
}

pub async fn admin_incidents(State(state): State<AppState>, RequireAdmin(session): RequireAdmin, jar: CookieJar) -> Response {
    render(&state, jar, Page::AdminIncidents, &session)
}

pub async fn admin_users(State(state): State<AppState>, RequireAdmin(session): RequireAdmin, jar: CookieJar) -> Response {
    render(&state, jar, Page::AdminUsers, &session)
}

pub async fn admin_gamification(
    State(state): State<AppState>,
    RequireAdmin(session): RequireAdmin,
    jar: CookieJar,
) -> Response {
    render(&state, jar, Page::AdminGamification, &session)
}

pub async fn admin_settings(State(state): State<AppState>, RequireAdmin(session): RequireAdmin, jar: CookieJar) -> Response {
    render(&state, jar, Page::AdminSettings, &session)
}

// =============================================================================
// USER PAGES
// =============================================================================

/// `GET /user` and `GET /user/dashboard`
pub async fn user_dashboard(State(state): State<AppState>, RequireUser(session): RequireUser, jar: CookieJar) -> Response {
    render(&state, jar, Page::UserDashboard, &session)
}

pub async fn report_incident(State(state): State<AppState>, RequireUser(session): RequireUser, jar: CookieJar) -> Response {
    render(&state, jar, Page::ReportIncident, &session)
}

pub async fn user_reports(State(state): State<AppState>, RequireUser(session): RequireUser, jar: CookieJar) -> Response {
    render(&state, jar, Page::UserReports, &session)
}

pub async fn user_achievements(
    State(state): State<AppState>,
    RequireUser(session): RequireUser,
    jar: CookieJar,
) -> Response {
    render(&state, jar, Page::UserAchievements, &session)
}

pub async fn user_profile(State(state): State<AppState>, RequireUser(session): RequireUser, jar: CookieJar) -> Response {
    render(&state, jar, Page::UserProfile, &session)
}
