//! Layout shells: persistent navigation chrome around nested pages.

use super::escape;
use crate::routes::paths;
use crate::services::session::Session;

const ADMIN_NAV: &[(&str, &str)] = &[
    (paths::ADMIN_DASHBOARD, "Dashboard"),
    (paths::ADMIN_INCIDENTS, "Incidents"),
    (paths::ADMIN_USERS, "Users"),
    (paths::ADMIN_GAMIFICATION, "Gamification"),
    (paths::ADMIN_SETTINGS, "Settings"),
];

const USER_NAV: &[(&str, &str)] = &[
    (paths::USER_DASHBOARD, "Dashboard"),
    (paths::USER_REPORT, "Report Incident"),
    (paths::USER_REPORTS, "My Reports"),
    (paths::USER_ACHIEVEMENTS, "Achievements"),
    (paths::USER_PROFILE, "Profile"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Admin,
    User,
}

impl Shell {
    fn nav(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Admin => ADMIN_NAV,
            Self::User => USER_NAV,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin Console",
            Self::User => "Field Reporter",
        }
    }
}

/// Wrap page content in the shell's sidebar and header. `active` is the
/// current path, highlighted in the nav.
#[must_use]
pub fn wrap(shell: Shell, session: &Session, active: &str, content: &str) -> String {
    let links: String = shell
        .nav()
        .iter()
        .map(|(href, label)| {
            let current = if *href == active { r#" aria-current="page""# } else { "" };
            format!(r#"<li><a href="{href}"{current}>{label}</a></li>"#)
        })
        .collect();

    format!(
        r#"<div class="layout layout--{kind}">
<aside class="sidebar"><div class="brand">Mangrove <small>{label}</small></div><nav><ul>{links}</ul></nav></aside>
<div class="main">
<header class="topbar"><span class="who">{name} &lt;{email}&gt;</span>
<form method="post" action="{logout}"><button type="submit">Sign out</button></form></header>
<main>{content}</main>
</div>
</div>"#,
        kind = match shell {
            Shell::Admin => "admin",
            Shell::User => "user",
        },
        label = shell.label(),
        name = escape(&session.identity.name),
        email = escape(&session.identity.email),
        logout = paths::LOGOUT,
    )
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
