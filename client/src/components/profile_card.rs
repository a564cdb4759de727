//! Read-only summary of the signed-in user's profile.

#[cfg(test)]
#[path = "profile_card_test.rs"]
mod profile_card_test;

use leptos::prelude::*;

use crate::net::types::UserRecord;
use crate::state::auth::AuthState;

/// Label/value rows shown on the card, skipping empty fields.
pub fn profile_rows(user: &UserRecord) -> Vec<(&'static str, String)> {
    [
        ("Username", Some(user.username.clone())),
        ("Email", Some(user.email.clone())),
        ("Phone", user.phone_number.clone()),
        ("Role", user.role.clone()),
        ("Member since", user.created_at.clone()),
        ("Last login", user.last_login_date.clone()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.filter(|v| !v.is_empty()).map(|v| (label, v)))
    .collect()
}

/// Row identity for `<For>`: a changed value must re-render its row.
pub fn row_key(row: &(&'static str, String)) -> (&'static str, String) {
    (row.0, row.1.clone())
}

#[component]
pub fn ProfileCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let rows = move || auth.get().user().map(profile_rows).unwrap_or_default();

    view! {
        <section class="profile-card">
            <h2>"Profile"</h2>
            <dl class="profile-card__fields">
                <For
                    each=rows
                    key=row_key
                    children=|(label, value)| {
                        view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        }
                    }
                />
            </dl>
        </section>
    }
}
