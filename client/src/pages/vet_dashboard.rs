//! Veterinarian dashboard.

use leptos::prelude::*;

use crate::components::dashboard_header::DashboardHeader;
use crate::components::profile_card::ProfileCard;

#[component]
pub fn VetDashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard">
            <DashboardHeader title="Veterinary Dashboard"/>
            <main class="dashboard__body">
                <section class="dashboard__panel">
                    <h2>"Appointments & health records"</h2>
                    <p>"Review scheduled visits and the health history of animals in your care."</p>
                </section>
                <ProfileCard/>
            </main>
        </div>
    }
}
