use super::*;
use crate::identity::Role;
use crate::state::test_helpers;

const ALL: [Page; 10] = [
    Page::AdminDashboard,
    Page::AdminIncidents,
    Page::AdminUsers,
    Page::AdminGamification,
    Page::AdminSettings,
    Page::UserDashboard,
    Page::ReportIncident,
    Page::UserReports,
    Page::UserAchievements,
    Page::UserProfile,
];

#[test]
fn admin_pages_use_admin_shell_and_prefix() {
    for page in ALL {
        let admin_path = page.path().starts_with("/admin_");
        assert_eq!(page.shell() == Shell::Admin, admin_path, "{page:?}");
        if !admin_path {
            assert!(page.path().starts_with("/user/"), "{page:?}");
        }
    }
}

#[test]
fn login_form_posts_email_and_password() {
    let html = login();
    assert!(html.contains(r#"action="/admin_login""#));
    assert!(html.contains(r#"name="email""#));
    assert!(html.contains(r#"name="password""#));
    assert!(html.contains(r#"href="/admin_signup""#));
}

#[test]
fn signup_form_has_confirmation_field() {
    let html = signup();
    assert!(html.contains(r#"action="/admin_signup""#));
    assert!(html.contains(r#"name="confirm_password""#));
    assert!(html.contains(r#"name="name""#));
}

#[test]
fn home_links_depend_on_access() {
    assert!(home(&Access::Unauthenticated).contains(paths::LOGIN));
    let admin = Access::Admin(test_helpers::session(Role::Admin));
    assert!(home(&admin).contains(paths::ADMIN_DASHBOARD));
    let user = Access::User(test_helpers::session(Role::User));
    assert!(home(&user).contains(paths::USER_DASHBOARD));
}

#[test]
fn profile_shows_identity() {
    let session = test_helpers::session(Role::User);
    let html = Page::UserProfile.content(&session);
    assert!(html.contains(&session.identity.email));
    assert!(html.contains("<dd>user</dd>"));
}

#[test]
fn not_found_escapes_path() {
    let html = not_found("/<x>");
    assert!(html.contains("/&lt;x&gt;"));
}
