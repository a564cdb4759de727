//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::config::ClientConfig;
use crate::net::api::HttpGateway;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, dashboard::DashboardPage, login::LoginPage, signup::SignupPage,
    vet_dashboard::VetDashboardPage,
};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::state::storage::BrowserStorage;

/// The session store shared through context.
pub type AppSession = SessionStore<BrowserStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Opens the session store, provides it with the auth gateway and the reactive
/// auth state, and restores the persisted session before any route is gated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Arc::new(AppSession::open(BrowserStorage));
    let gateway = HttpGateway::new(ClientConfig::from_build_env());
    let auth = RwSignal::new(AuthState::pending());

    provide_context(auth);
    provide_context(session.clone());
    provide_context(gateway.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let restored = crate::state::auth::resume(&session, &gateway).await;
        auth.set(restored);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, gateway);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/farmtech.css"/>
        <Title text="FarmTech Livestock"/>

        <Router>
            <Routes fallback=|| view! { <RouteGuard><p>"Page not found."</p></RouteGuard> }>
                <Route path=StaticSegment("") view=|| view! { <RouteGuard><LoginPage/></RouteGuard> }/>
                <Route path=StaticSegment("login") view=|| view! { <RouteGuard><LoginPage/></RouteGuard> }/>
                <Route path=StaticSegment("signup") view=|| view! { <RouteGuard><SignupPage/></RouteGuard> }/>
                <Route path=StaticSegment("dashboard") view=|| view! { <RouteGuard><DashboardPage/></RouteGuard> }/>
                <Route path=StaticSegment("vet") view=|| view! { <RouteGuard><VetDashboardPage/></RouteGuard> }/>
                <Route path=StaticSegment("admin") view=|| view! { <RouteGuard><AdminDashboardPage/></RouteGuard> }/>
            </Routes>
        </Router>
    }
}
