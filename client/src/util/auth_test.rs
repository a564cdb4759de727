use super::*;
use crate::net::types::UserRecord;
use crate::state::role::Role;
use crate::state::session::SessionSnapshot;

fn admin_state() -> AuthState {
    AuthState {
        snapshot: SessionSnapshot {
            authenticated: true,
            user: Some(UserRecord { username: "root".to_owned(), role: Some("ADMIN".to_owned()), ..UserRecord::default() }),
            role: Some(Role::Admin),
        },
        loading: false,
    }
}

#[test]
fn no_decision_while_loading() {
    assert_eq!(guard_decision(&AuthState::pending(), "/admin"), None);
}

#[test]
fn signed_out_state_is_sent_to_login() {
    assert_eq!(
        guard_decision(&AuthState::default(), "/admin"),
        Some(RouteDecision::RedirectToLogin { target: route_gate::LOGIN_PATH })
    );
}

#[test]
fn admin_state_renders_admin_route() {
    assert_eq!(guard_decision(&admin_state(), "/admin"), Some(RouteDecision::Render));
}
