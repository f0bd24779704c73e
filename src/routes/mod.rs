//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public pages (`/home`, `/admin_login`, `/admin_signup`) are open to all.
//! Admin-prefixed pages sit behind `RequireAdmin`, and `/user/*` pages behind
//! `RequireUser`. Anything unmatched renders NotFound.

pub mod auth;
pub mod cookies;
pub mod guard;
pub mod pages;
pub mod paths;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(paths::ROOT, get(pages::root))
        .route(paths::HOME, get(pages::home))
        .route(paths::LOGIN, get(auth::login_page).post(auth::login_submit))
        .route(paths::SIGNUP, get(auth::signup_page).post(auth::signup_submit))
        .route(paths::LOGOUT, post(auth::logout))
        .route(paths::ADMIN_DASHBOARD, get(pages::admin_dashboard))
        .route(paths::ADMIN_INCIDENTS, get(pages::admin_incidents))
        .route(paths::ADMIN_USERS, get(pages::admin_users))
        .route(paths::ADMIN_GAMIFICATION, get(pages::admin_gamification))
        .route(paths::ADMIN_SETTINGS, get(pages::admin_settings))
        .route(paths::USER_INDEX, get(pages::user_dashboard))
        .route(paths::USER_DASHBOARD, get(pages::user_dashboard))
        .route(paths::USER_REPORT, get(pages::report_incident))
        .route(paths::USER_REPORTS, get(pages::user_reports))
        .route(paths::USER_ACHIEVEMENTS, get(pages::user_achievements))
        .route(paths::USER_PROFILE, get(pages::user_profile))
        .route("/api/auth/me", get(auth::me))
        .route("/healthz", get(healthz))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
