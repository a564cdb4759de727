//! Signup page: account registration with per-field validation.
//!
//! A successful registration signs the user in immediately; the route guard
//! then moves them to their role's dashboard.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::api::HttpGateway;
use crate::net::types::RegisterRequest;
use crate::state::auth::AuthState;
use crate::util::route_gate::LOGIN_PATH;

/// Roles a new account may pick, as `(wire value, label)`.
pub const ROLE_OPTIONS: &[(&str, &str)] = &[("FARMER", "Farmer"), ("BUYER", "Buyer"), ("VETERINARIAN", "Veterinarian")];
pub const DEFAULT_SIGNUP_ROLE: &str = "FARMER";

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 6;
const MAX_NAME_LEN: usize = 50;
const MAX_PHONE_LEN: usize = 15;

/// Raw form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub role: String,
    pub password: String,
    pub confirm_password: String,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            role: DEFAULT_SIGNUP_ROLE.to_owned(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

/// Validation failures keyed by field; `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub phone_number: Option<&'static str>,
    pub role: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Matches `local@domain.tld`: one `@`, no whitespace, and a dot inside the
/// domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Check every field and build the registration request.
///
/// # Errors
///
/// Returns every failing field at once so the form can mark them together.
pub fn validate_signup(form: &SignupForm) -> Result<RegisterRequest, SignupErrors> {
    let username = form.username.trim();
    let email = form.email.trim();
    let mut errors = SignupErrors::default();

    if username.chars().count() < MIN_USERNAME_LEN {
        errors.username = Some("Username must be at least 3 characters");
    }
    if !is_valid_email(email) {
        errors.email = Some("Please enter a valid email address");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some("Password must be at least 6 characters");
    }
    if form.password != form.confirm_password {
        errors.confirm_password = Some("Passwords do not match");
    }
    if form.role.trim().is_empty() {
        errors.role = Some("Please select a role");
    }
    if form.first_name.trim().chars().count() > MAX_NAME_LEN {
        errors.first_name = Some("First name cannot exceed 50 characters");
    }
    if form.last_name.trim().chars().count() > MAX_NAME_LEN {
        errors.last_name = Some("Last name cannot exceed 50 characters");
    }
    if form.phone_number.trim().chars().count() > MAX_PHONE_LEN {
        errors.phone_number = Some("Phone number cannot exceed 15 characters");
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        first_name: optional(&form.first_name),
        last_name: optional(&form.last_name),
        phone_number: optional(&form.phone_number),
        role: form.role.trim().to_owned(),
    })
}

#[component]
fn FieldError(message: Signal<Option<&'static str>>) -> impl IntoView {
    move || message.get().map(|m| view! { <p class="auth-field-error">{m}</p> })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Arc<AppSession>>();
    let gateway = expect_context::<HttpGateway>();

    let form = RwSignal::new(SignupForm::default());
    let errors = RwSignal::new(SignupErrors::default());
    let submit_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup(&form.get()) {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(SignupErrors::default());
        submit_error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match crate::state::auth::submit_register(&session, &gateway, &request).await {
                    Ok(outcome) => {
                        log::info!("registered {}, redirecting to {}", outcome.user.username, outcome.redirect);
                        auth.set(AuthState::restore(&session));
                    }
                    Err(e) => submit_error.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &session, &gateway, auth);
        }
    };

    // Editing a field clears its error.
    macro_rules! bind {
        ($field:ident) => {
            move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| f.$field = value);
                errors.update(|e| e.$field = None);
            }
        };
    }
    macro_rules! value {
        ($field:ident) => {
            move || form.with(|f| f.$field.clone())
        };
    }
    macro_rules! field_error {
        ($field:ident) => {
            Signal::derive(move || errors.with(|e| e.$field))
        };
    }

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join the FarmTech livestock platform"</p>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-row">
                        <div class="auth-field">
                            <label class="auth-label">"Username *"</label>
                            <input class="auth-input" type="text" prop:value={value!(username)} on:input={bind!(username)}/>
                            <FieldError message={field_error!(username)}/>
                        </div>
                        <div class="auth-field">
                            <label class="auth-label">"Email *"</label>
                            <input class="auth-input" type="email" prop:value={value!(email)} on:input={bind!(email)}/>
                            <FieldError message={field_error!(email)}/>
                        </div>
                    </div>
                    <div class="auth-row">
                        <div class="auth-field">
                            <label class="auth-label">"First Name"</label>
                            <input class="auth-input" type="text" prop:value={value!(first_name)} on:input={bind!(first_name)}/>
                            <FieldError message={field_error!(first_name)}/>
                        </div>
                        <div class="auth-field">
                            <label class="auth-label">"Last Name"</label>
                            <input class="auth-input" type="text" prop:value={value!(last_name)} on:input={bind!(last_name)}/>
                            <FieldError message={field_error!(last_name)}/>
                        </div>
                    </div>
                    <div class="auth-row">
                        <div class="auth-field">
                            <label class="auth-label">"Phone Number"</label>
                            <input class="auth-input" type="tel" prop:value={value!(phone_number)} on:input={bind!(phone_number)}/>
                            <FieldError message={field_error!(phone_number)}/>
                        </div>
                        <div class="auth-field">
                            <label class="auth-label">"Role *"</label>
                            <select class="auth-input" prop:value={value!(role)} on:change={bind!(role)}>
                                {ROLE_OPTIONS
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                            <FieldError message={field_error!(role)}/>
                        </div>
                    </div>
                    <div class="auth-row">
                        <div class="auth-field">
                            <label class="auth-label">"Password *"</label>
                            <input class="auth-input" type="password" prop:value={value!(password)} on:input={bind!(password)}/>
                            <FieldError message={field_error!(password)}/>
                        </div>
                        <div class="auth-field">
                            <label class="auth-label">"Confirm Password *"</label>
                            <input
                                class="auth-input"
                                type="password"
                                prop:value={value!(confirm_password)}
                                on:input={bind!(confirm_password)}
                            />
                            <FieldError message={field_error!(confirm_password)}/>
                        </div>
                    </div>
                    <Show when=move || !submit_error.get().is_empty()>
                        <p class="auth-message auth-message--error">{move || submit_error.get()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
