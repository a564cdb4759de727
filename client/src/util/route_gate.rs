//! Route authorization gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation is checked here against the current session snapshot.
//! The gate is pure: it keeps no state, never touches the session store, and
//! is safe to call on every back/forward step.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use crate::state::role::{self, ADMIN_DASHBOARD_PATH, FARMER_DASHBOARD_PATH, Role, VET_DASHBOARD_PATH};
use crate::state::session::SessionSnapshot;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";

/// Who may view a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Sign-in screens; authenticated users are sent to their dashboard.
    Public,
    /// Any authenticated user.
    Protected,
    /// Authenticated users holding one of these roles.
    RoleProtected(&'static [Role]),
}

/// Outcome of checking one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    RedirectToLogin { target: &'static str },
    RedirectToDefault { target: &'static str },
}

impl RouteDecision {
    /// Redirect destination, if this decision redirects.
    pub fn target(self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::RedirectToLogin { target } | Self::RedirectToDefault { target } => Some(target),
        }
    }
}

pub const ROUTES: &[(&str, RouteAccess)] = &[
    (ROOT_PATH, RouteAccess::Public),
    (LOGIN_PATH, RouteAccess::Public),
    (SIGNUP_PATH, RouteAccess::Public),
    (FARMER_DASHBOARD_PATH, RouteAccess::Protected),
    (VET_DASHBOARD_PATH, RouteAccess::RoleProtected(&[Role::Veterinarian])),
    (ADMIN_DASHBOARD_PATH, RouteAccess::RoleProtected(&[Role::Admin])),
];

/// Strip the query/fragment and any trailing slash (keeping the root `/`).
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { ROOT_PATH } else { trimmed }
}

/// Access class for `path`, or `None` for an unknown route.
pub fn access_for(path: &str) -> Option<RouteAccess> {
    let path = normalize_path(path);
    ROUTES.iter().find(|(route, _)| *route == path).map(|(_, access)| *access)
}

/// Decide what to show for `path` given `session`.
pub fn evaluate(path: &str, session: &SessionSnapshot) -> RouteDecision {
    decide(access_for(path), session)
}

/// Decide for a known access class; `None` means the path matched no route.
pub fn decide(access: Option<RouteAccess>, session: &SessionSnapshot) -> RouteDecision {
    let to_default = || RouteDecision::RedirectToDefault { target: role::default_route(session.role) };
    let to_login = RouteDecision::RedirectToLogin { target: LOGIN_PATH };

    match access {
        Some(RouteAccess::Public) if session.authenticated => to_default(),
        Some(RouteAccess::Public) => RouteDecision::Render,
        Some(RouteAccess::Protected | RouteAccess::RoleProtected(_)) if !session.authenticated => to_login,
        Some(RouteAccess::RoleProtected(allowed)) => match session.role {
            Some(role) if allowed.contains(&role) => RouteDecision::Render,
            _ => to_default(),
        },
        Some(RouteAccess::Protected) => RouteDecision::Render,
        None if session.authenticated => to_default(),
        None => to_login,
    }
}
