//! Top bar for dashboard screens: title, signed-in user, and logout.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::state::auth::{self, AuthState};

#[component]
pub fn DashboardHeader(#[prop(into)] title: String) -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Arc<AppSession>>();

    let identity = move || {
        let state = auth_state.get();
        let name = state.user().map(|u| u.display_name()).unwrap_or_default();
        let role = state.role().map_or("Member", |r| r.label());
        (name, role)
    };

    // Clearing the auth state lets the route guard send the user to login.
    let on_logout = move |_| auth_state.set(auth::logout(&session));

    view! {
        <header class="dashboard-header">
            <h1 class="dashboard-header__title">{title}</h1>
            <span class="dashboard-header__spacer"></span>
            <span class="dashboard-header__user">
                {move || identity().0}
                " ("
                <span class="dashboard-header__role">{move || identity().1}</span>
                ")"
            </span>
            <button class="btn dashboard-header__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
