//! URL paths served by the router.

use crate::identity::Role;

pub const ROOT: &str = "/";
pub const HOME: &str = "/home";
pub const LOGIN: &str = "/admin_login";
pub const SIGNUP: &str = "/admin_signup";
pub const LOGOUT: &str = "/logout";

pub const ADMIN_DASHBOARD: &str = "/admin_dashboard";
pub const ADMIN_INCIDENTS: &str = "/admin_incidents";
pub const ADMIN_USERS: &str = "/admin_users";
pub const ADMIN_GAMIFICATION: &str = "/admin_gamification";
pub const ADMIN_SETTINGS: &str = "/admin_settings";

pub const USER_INDEX: &str = "/user";
pub const USER_DASHBOARD: &str = "/user/dashboard";
pub const USER_REPORT: &str = "/user/report";
pub const USER_REPORTS: &str = "/user/reports";
pub const USER_ACHIEVEMENTS: &str = "/user/achievements";
pub const USER_PROFILE: &str = "/user/profile";

/// Where a freshly signed-in visitor lands.
#[must_use]
pub fn landing_for(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_DASHBOARD,
        Role::User => USER_DASHBOARD,
    }
}
