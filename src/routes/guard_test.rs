use super::*;
use crate::identity::Role;
use crate::state::test_helpers;

fn user() -> Access {
    Access::User(test_helpers::session(Role::User))
}

fn admin() -> Access {
    Access::Admin(test_helpers::session(Role::Admin))
}

fn rendered_role(outcome: GuardOutcome<'_>) -> Option<Role> {
    match outcome {
        GuardOutcome::Render(session) => Some(session.role),
        GuardOutcome::Redirect(_) => None,
    }
}

#[test]
fn unauthenticated_always_sent_to_login() {
    for guard in [Guard::Protected, Guard::Admin] {
        assert!(matches!(decide(guard, &Access::Unauthenticated), GuardOutcome::Redirect(to) if to == paths::LOGIN));
    }
}

#[test]
fn protected_renders_for_any_session() {
    assert_eq!(rendered_role(decide(Guard::Protected, &user())), Some(Role::User));
    assert_eq!(rendered_role(decide(Guard::Protected, &admin())), Some(Role::Admin));
}

#[test]
fn admin_guard_bounces_users_to_user_dashboard() {
    assert!(matches!(decide(Guard::Admin, &user()), GuardOutcome::Redirect(to) if to == paths::USER_DASHBOARD));
}

#[test]
fn admin_guard_renders_for_admins() {
    assert_eq!(rendered_role(decide(Guard::Admin, &admin())), Some(Role::Admin));
}

#[test]
fn rendered_session_is_the_visitors_own() {
    let access = user();
    let GuardOutcome::Render(session) = decide(Guard::Protected, &access) else {
        panic!("expected render");
    };
    assert_eq!(Some(&session.identity), access.session().map(|s| &s.identity));
}

#[test]
fn landing_follows_role() {
    assert_eq!(paths::landing_for(Role::Admin), paths::ADMIN_DASHBOARD);
    assert_eq!(paths::landing_for(Role::User), paths::USER_DASHBOARD);
}
