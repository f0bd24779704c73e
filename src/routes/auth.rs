//! Auth routes — login and signup forms, logout, current-session JSON.
//!
//! Form submissions answer with a redirect and carry their outcome to the
//! next page as a flash toast. Validation failures never reach the identity
//! service.

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, warn};

use super::cookies;
use super::guard::CurrentAccess;
use super::paths;
use crate::services::auth::Access;
use crate::services::forms::{LoginForm, SignupForm};
use crate::services::notify::Toast;
use crate::services::session::SessionUser;
use crate::state::AppState;
use crate::views::{self, pages};

const VALIDATION_TITLE: &str = "Validation Error";

/// `GET /admin_login` — sign-in form; signed-in visitors go to their landing page.
pub async fn login_page(State(state): State<AppState>, CurrentAccess(access): CurrentAccess, jar: CookieJar) -> Response {
    if let Some(session) = access.session() {
        return Redirect::to(paths::landing_for(session.role)).into_response();
    }
    let (jar, toast) = cookies::take_flash(jar, state.cookie_secure);
    (jar, views::document("Sign In", toast.as_ref(), &pages::login())).into_response()
}

/// `POST /admin_login` — validate, sign in, redirect by role.
pub async fn login_submit(State(state): State<AppState>, jar: CookieJar, Form(form): Form<LoginForm>) -> Response {
    let secure = state.cookie_secure;
    let creds = match form.validate() {
        Ok(c) => c,
        Err(e) => {
            let jar = cookies::with_flash(jar, &Toast::error(VALIDATION_TITLE, &e.to_string()), secure);
            return (jar, Redirect::to(paths::LOGIN)).into_response();
        }
    };

    match state.auth.login(&creds.email, &creds.password).await {
        Ok((token, session)) => {
            // A stale session from the same browser is replaced, not leaked.
            if let Some(previous) = cookies::session_token(&jar) {
                state.auth.sessions().remove(&previous).await;
            }
            let jar = jar.add(cookies::session_cookie(token, secure, state.auth.max_age()));
            let jar = cookies::with_flash(jar, &Toast::success("Login Successful", "Welcome back."), secure);
            (jar, Redirect::to(paths::landing_for(session.role))).into_response()
        }
        Err(e) => {
            warn!(error = %e, status = ?e.upstream_status(), "login failed");
            let jar = cookies::with_flash(jar, &Toast::error("Login Failed", &e.user_message()), secure);
            (jar, Redirect::to(paths::LOGIN)).into_response()
        }
    }
}

/// `GET /admin_signup` — registration form; signed-in visitors go to the admin area.
pub async fn signup_page(State(state): State<AppState>, CurrentAccess(access): CurrentAccess, jar: CookieJar) -> Response {
    if access.session().is_some() {
        return Redirect::to(paths::ADMIN_DASHBOARD).into_response();
    }
    let (jar, toast) = cookies::take_flash(jar, state.cookie_secure);
    (jar, views::document("Create Account", toast.as_ref(), &pages::signup())).into_response()
}

/// `POST /admin_signup` — validate and create the account. Does not sign in.
pub async fn signup_submit(State(state): State<AppState>, jar: CookieJar, Form(form): Form<SignupForm>) -> Response {
    let secure = state.cookie_secure;
    let toast = match form.validate() {
        Err(e) => Toast::error(VALIDATION_TITLE, &e.to_string()),
        Ok(creds) => {
            let name = creds.name.as_deref().unwrap_or_default();
            match state.auth.signup(&creds.email, &creds.password, name).await {
                Ok(()) => Toast::success(
                    "Account Created",
                    "Welcome! Please check your email to confirm your account.",
                ),
                Err(e) => {
                    warn!(error = %e, status = ?e.upstream_status(), "signup failed");
                    Toast::error("Signup Failed", &e.user_message())
                }
            }
        }
    };
    let jar = cookies::with_flash(jar, &toast, secure);
    (jar, Redirect::to(paths::SIGNUP)).into_response()
}

/// `POST /logout` — end the session, clear the cookie, back to sign-in.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let secure = state.cookie_secure;
    if let Some(token) = cookies::session_token(&jar) {
        if state.auth.logout(&token).await {
            info!("session ended by visitor");
        }
    }
    let jar = jar.add(cookies::removal(cookies::SESSION_COOKIE, secure));
    let jar = cookies::with_flash(jar, &Toast::success("Signed Out", "You have been signed out."), secure);
    (jar, Redirect::to(paths::LOGIN)).into_response()
}

/// `GET /api/auth/me` — return the current session, or 401.
pub async fn me(CurrentAccess(access): CurrentAccess) -> Result<Json<SessionUser>, StatusCode> {
    match access {
        Access::Unauthenticated => Err(StatusCode::UNAUTHORIZED),
        Access::User(session) | Access::Admin(session) => Ok(Json(SessionUser::from(&session))),
    }
}
