//! Page bodies.

use super::escape;
use super::layout::Shell;
use crate::routes::paths;
use crate::services::auth::Access;
use crate::services::session::Session;

// =============================================================================
// PUBLIC PAGES
// =============================================================================

#[must_use]
pub fn login() -> String {
    format!(
        r#"<section class="auth-card">
<h1>Mangrove <small>Surveillance</small></h1>
<form method="post" action="{login}">
<label for="email">Email</label>
<input id="email" name="email" type="email" placeholder="admin@example.com" required>
<label for="password">Password</label>
<input id="password" name="password" type="password" required>
<button type="submit">Sign In</button>
</form>
<p>Don't have an account? <a href="{signup}">Register here</a></p>
<a class="back" href="{home}">← Back</a>
</section>"#,
        login = paths::LOGIN,
        signup = paths::SIGNUP,
        home = paths::HOME,
    )
}

#[must_use]
pub fn signup() -> String {
    format!(
        r#"<section class="auth-card">
<h1>Create Account</h1>
<form method="post" action="{signup}">
<label for="name">Full Name</label>
<input id="name" name="name" placeholder="John Doe">
<label for="email">Email</label>
<input id="email" name="email" type="email" placeholder="admin@mangrove.org">
<label for="password">Password</label>
<input id="password" name="password" type="password">
<label for="confirm_password">Confirm Password</label>
<input id="confirm_password" name="confirm_password" type="password">
<button type="submit">Sign Up</button>
</form>
<p>Already have an account? <a href="{login}">Sign in</a></p>
<a class="back" href="{home}">← Back</a>
</section>"#,
        signup = paths::SIGNUP,
        login = paths::LOGIN,
        home = paths::HOME,
    )
}

#[must_use]
pub fn home(access: &Access) -> String {
    let cta = match access {
        Access::Unauthenticated => format!(
            r#"<a class="button" href="{}">Sign In</a> <a class="button" href="{}">Register</a>"#,
            paths::LOGIN,
            paths::SIGNUP
        ),
        Access::User(s) | Access::Admin(s) => format!(
            r#"<a class="button" href="{}">Go to your dashboard, {}</a>"#,
            paths::landing_for(s.role),
            escape(&s.identity.name)
        ),
    };
    format!(
        r#"<section class="hero">
<h1>Mangrove Watch</h1>
<p>Community surveillance for mangrove ecosystems. Report cutting, dumping and encroachment, and follow how every incident is handled.</p>
{cta}
</section>"#
    )
}

#[must_use]
pub fn not_found(path: &str) -> String {
    format!(
        r#"<section class="not-found">
<h1>404</h1>
<p>Oops! Page not found: <code>{}</code></p>
<a href="{}">Return to Home</a>
</section>"#,
        escape(path),
        paths::HOME
    )
}

// =============================================================================
// GUARDED PAGES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    AdminDashboard,
    AdminIncidents,
    AdminUsers,
    AdminGamification,
    AdminSettings,
    UserDashboard,
    ReportIncident,
    UserReports,
    UserAchievements,
    UserProfile,
}

impl Page {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::AdminDashboard => paths::ADMIN_DASHBOARD,
            Self::AdminIncidents => paths::ADMIN_INCIDENTS,
            Self::AdminUsers => paths::ADMIN_USERS,
            Self::AdminGamification => paths::ADMIN_GAMIFICATION,
            Self::AdminSettings => paths::ADMIN_SETTINGS,
            Self::UserDashboard => paths::USER_DASHBOARD,
            Self::ReportIncident => paths::USER_REPORT,
            Self::UserReports => paths::USER_REPORTS,
            Self::UserAchievements => paths::USER_ACHIEVEMENTS,
            Self::UserProfile => paths::USER_PROFILE,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::AdminDashboard | Self::UserDashboard => "Dashboard",
            Self::AdminIncidents => "Incident Management",
            Self::AdminUsers => "User Management",
            Self::AdminGamification => "Gamification",
            Self::AdminSettings => "Settings",
            Self::ReportIncident => "Report Incident",
            Self::UserReports => "My Reports",
            Self::UserAchievements => "Achievements",
            Self::UserProfile => "Profile",
        }
    }

    #[must_use]
    pub fn shell(self) -> Shell {
        match self {
            Self::AdminDashboard
            | Self::AdminIncidents
            | Self::AdminUsers
            | Self::AdminGamification
            | Self::AdminSettings => Shell::Admin,
            Self::UserDashboard
            | Self::ReportIncident
            | Self::UserReports
            | Self::UserAchievements
            | Self::UserProfile => Shell::User,
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            Self::AdminDashboard => "Overview of reported incidents, active reporters and response times.",
            Self::AdminIncidents => "Review, verify and resolve incidents submitted by the community.",
            Self::AdminUsers => "Manage reporter accounts and administrator access.",
            Self::AdminGamification => "Configure points, badges and leaderboards for reporters.",
            Self::AdminSettings => "Platform configuration and notification preferences.",
            Self::UserDashboard => "Your recent activity and the incidents you are following.",
            Self::ReportIncident => "Describe what you saw, where and when.",
            Self::UserReports => "Every incident you have reported and its current status.",
            Self::UserAchievements => "Badges and points earned for verified reports.",
            Self::UserProfile => "Your account details.",
        }
    }

    /// Page content, without layout chrome.
    #[must_use]
    pub fn content(self, session: &Session) -> String {
        let extra = match self {
            Self::AdminDashboard | Self::UserDashboard => {
                format!("<p>Welcome back, {}.</p>", escape(&session.identity.name))
            }
            Self::UserProfile => format!(
                "<dl><dt>Name</dt><dd>{}</dd><dt>Email</dt><dd>{}</dd><dt>Role</dt><dd>{}</dd></dl>",
                escape(&session.identity.name),
                escape(&session.identity.email),
                session.role.as_str()
            ),
            _ => String::new(),
        };
        format!("<h1>{}</h1>\n<p>{}</p>\n{extra}", self.title(), self.blurb())
    }
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
