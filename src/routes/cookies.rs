//! Session and flash cookies.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::services::notify::Toast;

pub const SESSION_COOKIE: &str = "mw_session";
pub const FLASH_COOKIE: &str = "mw_flash";

const FLASH_MAX_AGE_SECS: i64 = 60;

fn base(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Session token cookie.
#[must_use]
pub fn session_cookie(token: String, secure: bool, max_age: std::time::Duration) -> Cookie<'static> {
    let secs = i64::try_from(max_age.as_secs()).unwrap_or(i64::MAX);
    let mut cookie = base(SESSION_COOKIE, token, secure);
    cookie.set_max_age(Duration::seconds(secs));
    cookie
}

/// Expired cookie that makes the browser drop `name`.
#[must_use]
pub fn removal(name: &'static str, secure: bool) -> Cookie<'static> {
    let mut cookie = base(name, String::new(), secure);
    cookie.set_max_age(Duration::ZERO);
    cookie
}

#[must_use]
pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Queue a toast for the next rendered page.
#[must_use]
pub fn with_flash(jar: CookieJar, toast: &Toast, secure: bool) -> CookieJar {
    let mut cookie = base(FLASH_COOKIE, toast.encode(), secure);
    cookie.set_max_age(Duration::seconds(FLASH_MAX_AGE_SECS));
    jar.add(cookie)
}

/// Read and clear the pending toast, if any.
#[must_use]
pub fn take_flash(jar: CookieJar, secure: bool) -> (CookieJar, Option<Toast>) {
    let Some(raw) = jar.get(FLASH_COOKIE).map(|c| c.value().to_owned()) else {
        return (jar, None);
    };
    (jar.add(removal(FLASH_COOKIE, secure)), Toast::decode(&raw))
}

#[cfg(test)]
#[path = "cookies_test.rs"]
mod tests;
