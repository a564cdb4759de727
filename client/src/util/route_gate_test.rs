use super::*;
use crate::net::types::UserRecord;

// =============================================================
// Helpers
// =============================================================

fn signed_in(raw_role: Option<&str>) -> SessionSnapshot {
    let user = UserRecord {
        username: "user".to_owned(),
        role: raw_role.map(str::to_owned),
        ..UserRecord::default()
    };
    SessionSnapshot { authenticated: true, role: raw_role.and_then(Role::parse), user: Some(user) }
}

const VET_ROLES: &[Role] = &[Role::Veterinarian];

// =============================================================
// path handling
// =============================================================

#[test]
fn normalize_path_trims_slash_and_query() {
    assert_eq!(normalize_path("/vet/"), "/vet");
    assert_eq!(normalize_path("/admin?tab=breeds"), "/admin");
    assert_eq!(normalize_path("/dashboard#overview"), "/dashboard");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/"), "/");
}

#[test]
fn access_for_known_and_unknown_paths() {
    assert_eq!(access_for("/login"), Some(RouteAccess::Public));
    assert_eq!(access_for("/dashboard/"), Some(RouteAccess::Protected));
    assert_eq!(access_for("/vet"), Some(RouteAccess::RoleProtected(&[Role::Veterinarian])));
    assert_eq!(access_for("/nowhere"), None);
}

// =============================================================
// unauthenticated
// =============================================================

#[test]
fn unauthenticated_protected_routes_redirect_to_login() {
    let session = SessionSnapshot::signed_out();
    for path in ["/dashboard", "/vet", "/admin"] {
        assert_eq!(
            evaluate(path, &session),
            RouteDecision::RedirectToLogin { target: LOGIN_PATH },
            "path {path}"
        );
    }
}

#[test]
fn unauthenticated_public_routes_render() {
    let session = SessionSnapshot::signed_out();
    for path in ["/", "/login", "/signup"] {
        assert_eq!(evaluate(path, &session), RouteDecision::Render, "path {path}");
    }
}

#[test]
fn unauthenticated_unknown_route_redirects_to_login() {
    assert_eq!(
        evaluate("/missing", &SessionSnapshot::signed_out()),
        RouteDecision::RedirectToLogin { target: LOGIN_PATH }
    );
}

// =============================================================
// authenticated
// =============================================================

#[test]
fn veterinary_alias_renders_vet_route() {
    let session = signed_in(Some("VETERINARY"));
    assert_eq!(decide(Some(RouteAccess::RoleProtected(VET_ROLES)), &session), RouteDecision::Render);
    assert_eq!(evaluate("/vet", &session), RouteDecision::Render);
}

#[test]
fn veterinary_alias_on_admin_route_redirects_to_vet_dashboard() {
    let session = signed_in(Some("VETERINARY"));
    assert_eq!(
        decide(Some(RouteAccess::RoleProtected(&[Role::Admin])), &session),
        RouteDecision::RedirectToDefault { target: VET_DASHBOARD_PATH }
    );
}

#[test]
fn admin_on_login_redirects_to_admin_dashboard() {
    let session = signed_in(Some("ADMIN"));
    assert_eq!(evaluate("/login", &session), RouteDecision::RedirectToDefault { target: ADMIN_DASHBOARD_PATH });
}

#[test]
fn farmer_on_public_route_redirects_to_livestock_dashboard() {
    let session = signed_in(Some("FARMER"));
    assert_eq!(evaluate("/", &session), RouteDecision::RedirectToDefault { target: FARMER_DASHBOARD_PATH });
}

#[test]
fn protected_route_renders_for_any_role() {
    for role in [Some("FARMER"), Some("VET"), Some("ADMIN"), Some("BUYER"), None] {
        assert_eq!(evaluate("/dashboard", &signed_in(role)), RouteDecision::Render, "role {role:?}");
    }
}

#[test]
fn unknown_role_is_sent_to_livestock_dashboard() {
    let session = signed_in(Some("BUYER"));
    assert_eq!(evaluate("/admin", &session), RouteDecision::RedirectToDefault { target: FARMER_DASHBOARD_PATH });
    assert_eq!(evaluate("/signup", &session), RouteDecision::RedirectToDefault { target: FARMER_DASHBOARD_PATH });
}

#[test]
fn authenticated_unknown_route_redirects_to_default() {
    assert_eq!(
        evaluate("/reports", &signed_in(Some("ADMIN"))),
        RouteDecision::RedirectToDefault { target: ADMIN_DASHBOARD_PATH }
    );
}

#[test]
fn every_default_route_renders_for_its_owner() {
    for raw in ["FARMER", "VETERINARIAN", "ADMIN", "BUYER"] {
        let session = signed_in(Some(raw));
        let target = role::default_route(session.role);
        assert_eq!(evaluate(target, &session), RouteDecision::Render, "role {raw}");
    }
}

#[test]
fn decision_target() {
    assert_eq!(RouteDecision::Render.target(), None);
    assert_eq!(RouteDecision::RedirectToLogin { target: LOGIN_PATH }.target(), Some(LOGIN_PATH));
}
