//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical gating: nothing is decided until the
//! persisted session has been read, then the route gate has the final word.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::route_gate::{self, RouteDecision};
use crate::state::auth::AuthState;

/// Gate decision for `path`, or `None` while the session is still loading.
pub fn guard_decision(state: &AuthState, path: &str) -> Option<RouteDecision> {
    if state.loading {
        return None;
    }
    Some(route_gate::evaluate(path, &state.snapshot))
}
