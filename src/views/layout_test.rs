use super::*;
use crate::identity::Role;
use crate::state::test_helpers;

#[test]
fn admin_shell_lists_admin_pages() {
    let session = test_helpers::session(Role::Admin);
    let html = wrap(Shell::Admin, &session, paths::ADMIN_USERS, "<p>body</p>");
    for (href, _) in ADMIN_NAV {
        assert!(html.contains(&format!(r#"href="{href}""#)), "missing {href}");
    }
    assert!(html.contains(r#"<a href="/admin_users" aria-current="page">Users</a>"#));
    assert!(html.contains("<p>body</p>"));
    assert!(!html.contains(paths::USER_REPORT));
}

#[test]
fn user_shell_lists_user_pages_and_logout() {
    let session = test_helpers::session(Role::User);
    let html = wrap(Shell::User, &session, paths::USER_DASHBOARD, "");
    for (href, _) in USER_NAV {
        assert!(html.contains(&format!(r#"href="{href}""#)), "missing {href}");
    }
    assert!(html.contains(r#"action="/logout""#));
    assert!(!html.contains(paths::ADMIN_SETTINGS));
}

#[test]
fn shell_escapes_identity() {
    let mut session = test_helpers::session(Role::User);
    session.identity.name = "<b>Eve</b>".into();
    let html = wrap(Shell::User, &session, "", "");
    assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
}
