//! Route guard wrapping every screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluates the route gate whenever the location or the auth state
//! changes, so signing in, signing out and back/forward navigation all land
//! on the screen the gate allows.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::util::auth::guard_decision;
use crate::util::route_gate::{LOGIN_PATH, RouteDecision};

#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let decision = Memo::new(move |_| guard_decision(&auth.get(), &location.pathname.get()));

    move || match decision.get() {
        None => view! { <div class="route-loading">"Loading..."</div> }.into_any(),
        Some(RouteDecision::Render) => children(),
        Some(redirect) => {
            let target = redirect.target().unwrap_or(LOGIN_PATH);
            log::debug!("route gate redirect: {} -> {target}", location.pathname.get_untracked());
            view! { <Redirect path=target/> }.into_any()
        }
    }
}
