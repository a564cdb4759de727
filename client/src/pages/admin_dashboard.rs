//! Admin dashboard.

use leptos::prelude::*;

use crate::components::dashboard_header::DashboardHeader;
use crate::components::profile_card::ProfileCard;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard">
            <DashboardHeader title="Admin Dashboard"/>
            <main class="dashboard__body">
                <section class="dashboard__panel">
                    <h2>"Platform administration"</h2>
                    <p>"Manage users, livestock categories and breeds."</p>
                </section>
                <ProfileCard/>
            </main>
        </div>
    }
}
