//! Login page: username + email + password sign-in.
//!
//! On success the session is stored and the user is sent to the dashboard for
//! their role; on failure the server's message (or a generic one) is shown and
//! no session is kept.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::api::HttpGateway;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::util::route_gate::SIGNUP_PATH;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

/// Trim the form fields and require all three.
pub fn validate_login_input(username: &str, email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.trim().is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(LoginRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Arc<AppSession>>();
    let gateway = expect_context::<HttpGateway>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&username.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match crate::state::auth::submit_login(&session, &gateway, &request).await {
                    Ok(outcome) => {
                        // The route guard performs the redirect once auth state changes.
                        log::info!("signed in as {}, redirecting to {}", outcome.user.username, outcome.redirect);
                        auth.set(AuthState::restore(&session));
                    }
                    Err(e) => error.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &session, &gateway, auth);
        }
    };

    let clear_error = move || {
        if !error.get_untracked().is_empty() {
            error.set(String::new());
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to your FarmTech account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">"Username"</label>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                            clear_error();
                        }
                    />
                    <label class="auth-label">"Email"</label>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            clear_error();
                        }
                    />
                    <label class="auth-label">"Password"</label>
                    <div class="auth-password">
                        <input
                            class="auth-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                clear_error();
                            }
                        />
                        <button
                            class="auth-password__toggle"
                            type="button"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-message auth-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=SIGNUP_PATH>"Click here to sign up"</a>
                </p>
            </div>
        </div>
    }
}
