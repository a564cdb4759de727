//! Livestock dashboard: landing screen for farmers and any signed-in user
//! without a more specific role.

use leptos::prelude::*;

use crate::components::dashboard_header::DashboardHeader;
use crate::components::profile_card::ProfileCard;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        let name = auth.get().user().map(|u| u.display_name()).unwrap_or_default();
        format!("Welcome back, {name}")
    };

    view! {
        <div class="dashboard">
            <DashboardHeader title="Livestock Dashboard"/>
            <main class="dashboard__body">
                <section class="dashboard__panel">
                    <h2>{greeting}</h2>
                    <p>"Track your herd, breeds and health records from one place."</p>
                </section>
                <ProfileCard/>
            </main>
        </div>
    }
}
